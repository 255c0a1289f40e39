//! Tests for provider profile configuration.

use bayou_core::EndpointShape;
use bayou_providers::BayouConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn bundled_defaults_load() -> anyhow::Result<()> {
    let config = BayouConfig::load()?;

    assert!(config.profile("video_generations").is_some());
    let sora = config
        .profile("sora")
        .ok_or_else(|| anyhow::anyhow!("bundled sora profile missing"))?;
    assert_eq!(sora.endpoint_shape, EndpointShape::Sora);
    assert_eq!(sora.model.as_deref(), Some("sora-2"));
    Ok(())
}

#[test]
fn config_from_file() -> anyhow::Result<()> {
    let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
[defaults]
provider = "staging"

[providers.staging]
endpoint_shape = "sora"
base_url = "https://staging.example.com/v2/"
model = "sora-2-pro"
timeout_secs = 90
api_key_env = "BAYOU_TEST_KEY_THAT_IS_NEVER_SET"
"#
    )?;

    let config = BayouConfig::from_file(temp_file.path())?;
    assert_eq!(config.default_provider(), Some("staging"));

    let provider = config.provider_config(None)?;
    assert_eq!(provider.endpoint_shape(), EndpointShape::Sora);
    assert_eq!(provider.base_url(), "https://staging.example.com/v2");
    assert_eq!(provider.model(), Some("sora-2-pro"));
    assert_eq!(provider.timeout(), Duration::from_secs(90));
    assert!(!provider.has_api_key());
    Ok(())
}

#[test]
fn profile_defaults_fill_optional_fields() -> anyhow::Result<()> {
    let config = BayouConfig::from_toml(
        r#"
[providers.minimal]
endpoint_shape = "video_generations"
base_url = "https://minimal.example.com"
"#,
    )?;

    let profile = config
        .profile("minimal")
        .ok_or_else(|| anyhow::anyhow!("profile missing"))?;
    assert_eq!(profile.timeout_secs, 30);
    assert_eq!(profile.api_key_env, "BAYOU_VIDEO_API_KEY");
    assert!(profile.model.is_none());
    Ok(())
}

#[test]
fn unknown_profile_is_an_error() -> anyhow::Result<()> {
    let config = BayouConfig::from_toml(
        r#"
[providers.only]
endpoint_shape = "sora"
base_url = "https://only.example.com"
"#,
    )?;

    assert!(config.provider_config(Some("veo")).is_err());
    assert!(config.provider_config(None).is_err());
    assert!(config.provider_config(Some("only")).is_ok());
    Ok(())
}

#[test]
fn unknown_endpoint_shape_fails_to_parse() {
    let result = BayouConfig::from_toml(
        r#"
[providers.bad]
endpoint_shape = "carrier_pigeon"
base_url = "https://bad.example.com"
"#,
    );
    assert!(result.is_err());
}
