//! Layered settings loading

use std::path::PathBuf;

use tempfile::TempDir;

use kalkulator::application::ApplicationError;
use kalkulator::config::Settings;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn given_global_and_explicit_files_when_loading_then_explicit_wins() {
    let temp = TempDir::new().unwrap();
    let global = write_config(&temp, "global.toml", "repeat_report = true\nfraction_digits = 4\n");
    let explicit = write_config(&temp, "explicit.toml", "fraction_digits = 3\n");

    let settings = Settings::load_layers(Some(&global), Some(&explicit)).unwrap();

    assert!(settings.repeat_report, "inherited from global");
    assert_eq!(settings.fraction_digits, 3, "explicit file overrides global");
    assert!(settings.color, "default kept");
}

#[test]
fn given_missing_explicit_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let err = Settings::load_layers(None, Some(&missing)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { ref message } if message.contains("nope.toml")));
}

#[test]
fn given_malformed_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let bad = write_config(&temp, "bad.toml", "fraction_digits = \"many\"\n");

    let err = Settings::load_layers(None, Some(&bad)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_out_of_range_digits_when_loading_then_rejected() {
    let temp = TempDir::new().unwrap();
    let file = write_config(&temp, "digits.toml", "fraction_digits = 99\n");

    assert!(Settings::load_layers(None, Some(&file)).is_err());
}
