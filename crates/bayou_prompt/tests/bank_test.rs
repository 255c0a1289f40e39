//! Tests for the option bank and index sources.

use bayou_core::ClipDuration;
use bayou_prompt::{IndexSource, OptionBank, Pool, ScriptedIndices};

const BLANK_HANDLE_SETS: &[&[&str]] = &[&["@a", " "]];

#[test]
fn standard_bank_is_valid() -> anyhow::Result<()> {
    OptionBank::STANDARD.validate()?;
    Ok(())
}

#[test]
fn standard_bank_pool_sizes() {
    let bank = OptionBank::default();
    assert_eq!(bank.scenes.all().len(), 10);
    assert_eq!(bank.cameos.all().len(), 8);
    for pool in [bank.camera, bank.lighting, bank.styles, bank.dialogue, bank.sound, bank.moods] {
        assert_eq!(pool.all().len(), 8, "pool {}", pool.name());
    }
    assert_eq!(bank.durations.all(), &ClipDuration::ALL);
}

#[test]
fn dialogue_keeps_its_punctuation() {
    let dialogue = OptionBank::STANDARD.dialogue.all();
    for line in [
        "\"Down here, loyalty's like gator teeth — sharp till it breaks.\"",
        "\"If it's glowing, that means it's money… or radiation.\"",
        "\"They told me I couldn't be two things at once — so I became three.\"",
    ] {
        assert!(dialogue.contains(&line), "missing {}", line);
    }
}

#[test]
fn cameo_sets_hold_one_to_four_handles() {
    for set in OptionBank::STANDARD.cameos.all() {
        assert!((1..=4).contains(&set.len()));
        assert!(set.iter().all(|h| h.starts_with('@')));
    }
}

#[test]
fn pick_uses_the_index_source() -> anyhow::Result<()> {
    let pool = Pool::new("letters", &["a", "b", "c"]);
    let mut source = ScriptedIndices::new(vec![2, 0, 4]);
    assert_eq!(*pool.pick(&mut source)?, "c");
    assert_eq!(*pool.pick(&mut source)?, "a");
    assert_eq!(*pool.pick(&mut source)?, "b");
    Ok(())
}

#[test]
fn pick_from_empty_pool_fails() {
    let pool: Pool<&str> = Pool::new("nothing", &[]);
    assert!(pool.pick(&mut ScriptedIndices::default()).is_err());
}

#[test]
fn scripted_indices_wrap_and_rewind() {
    let mut source = ScriptedIndices::new(vec![1, 2]);
    let drawn: Vec<usize> = (0..5).map(|_| source.next_index(10)).collect();
    assert_eq!(drawn, vec![1, 2, 1, 2, 1]);
    assert_eq!(source.draws(), 5);

    source.rewind();
    assert_eq!(source.next_index(10), 1);
}

#[test]
fn bank_with_blank_handle_is_invalid() {
    let bank = OptionBank {
        cameos: Pool::new("cameos", BLANK_HANDLE_SETS),
        ..OptionBank::STANDARD
    };
    assert!(bank.validate().is_err());
}
