//! Tests for remix directives.

use bayou_core::{RemixOverride, RemixSource};
use bayou_error::PromptErrorKind;
use bayou_prompt::{CLOSING_INSTRUCTION, DIRECTIVE_HEADER, remix};

fn source() -> RemixSource {
    RemixSource::new(
        "https://videos.example.com/abc",
        "Yerm trapped inside a microwave trying to negotiate peace with it.",
    )
}

#[test]
fn remix_without_overrides_lists_no_settings() -> anyhow::Result<()> {
    let result = remix(&source(), &RemixOverride::default())?;
    let expected = format!(
        "{}\n\nORIGINAL:\n{}\n\nREMIX SETTINGS:\n\n{}",
        DIRECTIVE_HEADER,
        source().original_prompt(),
        CLOSING_INSTRUCTION
    );

    assert_eq!(result.rendered_directive(), &expected);
    assert_eq!(result.remix_version(), "Unknown Cinematic Remix");
    assert_eq!(result.original_video(), "https://videos.example.com/abc");

    let config = result.remix_config();
    assert!(config.characters().is_empty());
    assert_eq!(config.style(), "original style");
    assert_eq!(config.lighting(), "original lighting");
    assert_eq!(config.camera(), "original camera");
    assert_eq!(config.music(), "original music");
    assert_eq!(config.mood(), "original mood");
    Ok(())
}

#[test]
fn remix_names_version_after_first_character() -> anyhow::Result<()> {
    let overrides = RemixOverride::from_fields("@a,@b", "", "", "", "", "");
    let result = remix(&source(), &overrides)?;

    assert_eq!(result.remix_version(), "@a Cinematic Remix");
    assert_eq!(
        result.remix_config().characters(),
        &vec!["@a".to_string(), "@b".to_string()]
    );
    assert!(result.rendered_directive().contains("- Characters: @a, @b"));
    assert!(!result.rendered_directive().contains("- Style:"));
    Ok(())
}

#[test]
fn remix_settings_follow_fixed_order() -> anyhow::Result<()> {
    let overrides = RemixOverride::from_fields(
        "@obesewith.glassy",
        "vaporwave retro animation",
        "",
        "chaotic drone flyby",
        "banjo trap remix",
        "trippy and dreamlike",
    );
    let result = remix(&source(), &overrides)?;

    let settings: Vec<&str> = result
        .rendered_directive()
        .lines()
        .filter(|line| line.starts_with("- "))
        .collect();
    assert_eq!(
        settings,
        vec![
            "- Characters: @obesewith.glassy",
            "- Style: vaporwave retro animation",
            "- Camera: chaotic drone flyby",
            "- Music: banjo trap remix",
            "- Mood: trippy and dreamlike",
        ]
    );
    assert_eq!(result.remix_config().lighting(), "original lighting");
    Ok(())
}

#[test]
fn remix_keeps_original_prompt_verbatim() -> anyhow::Result<()> {
    let original = "  Line one\n  line two with trailing space ";
    let result = remix(
        &RemixSource::new("link", original),
        &RemixOverride::default().with_mood("sincere but ridiculous"),
    )?;
    assert!(result
        .rendered_directive()
        .contains(&format!("ORIGINAL:\n{}\n", original)));
    Ok(())
}

#[test]
fn remix_rejects_blank_original_prompt() {
    let err = remix(&RemixSource::new("link", "   "), &RemixOverride::default()).unwrap_err();
    assert!(matches!(err.kind(), PromptErrorKind::InvalidRequest(_)));
}

#[test]
fn remix_rejects_malformed_character_handle() {
    let overrides = RemixOverride::default().with_characters(vec!["@tee fred".to_string()]);
    let err = remix(&source(), &overrides).unwrap_err();
    assert!(matches!(err.kind(), PromptErrorKind::InvalidRequest(_)));
}

#[test]
fn blank_overrides_from_json_resolve_to_originals() -> anyhow::Result<()> {
    let overrides: RemixOverride =
        serde_json::from_str(r#"{"style": "", "mood": "  ", "characters": ["", " @a "]}"#)?;
    assert_eq!(overrides.characters(), &["@a".to_string()]);

    let result = remix(&source(), &overrides)?;
    assert_eq!(result.remix_config().style(), "original style");
    assert_eq!(result.remix_config().mood(), "original mood");
    assert_eq!(result.remix_version(), "@a Cinematic Remix");
    assert!(!result.rendered_directive().contains("- Style:"));

    let empty: RemixOverride = serde_json::from_str(r#"{"characters": [""]}"#)?;
    let result = remix(&source(), &empty)?;
    assert_eq!(result.remix_version(), "Unknown Cinematic Remix");
    assert!(!result.rendered_directive().contains("- Characters:"));
    Ok(())
}
