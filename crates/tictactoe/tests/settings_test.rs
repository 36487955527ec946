//! Tests for settings loading.

use std::io::Write;
use std::time::Duration;
use tictactoe::{Opponent, Settings};
use tictactoe_core::Scoring;

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(*settings.opponent(), Opponent::Computer);
    assert_eq!(settings.bot_delay(), Duration::from_millis(300));
    assert_eq!(*settings.scoring(), Scoring::Plain);
}

#[test]
fn test_file_values_and_partial_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"human\"\nscoring = \"depth_adjusted\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.opponent(), Opponent::Human);
    assert_eq!(*settings.scoring(), Scoring::DepthAdjusted);
    assert_eq!(*settings.bot_delay_ms(), 300);
}

#[test]
fn test_overrides_win_over_file() {
    let settings = Settings::default()
        .override_opponent(Some(Opponent::Human))
        .override_bot_delay_ms(Some(0))
        .override_scoring(None);
    assert_eq!(*settings.opponent(), Opponent::Human);
    assert_eq!(*settings.bot_delay_ms(), 0);
    assert_eq!(*settings.scoring(), Scoring::Plain);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"robot\"").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
