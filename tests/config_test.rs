// tests/config_test.rs
use git_vcm::config::{load_config, Config};
use git_vcm::domain::{Version, VersionBump};
use git_vcm::lifecycle::VersionStateMachine;
use git_vcm::VcmError;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const BEHAVIOR_FIXTURE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/config_with_behavior.toml");

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[versioning]
initial_version = "0.0.1"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.versioning.initial_version, "0.0.1");
    assert_eq!(config.versioning.bump, VersionBump::Minor);
    assert!(config.behavior.annotate);
}

#[test]
fn test_behavior_config_from_file() {
    let config = load_config(Some(BEHAVIOR_FIXTURE))
        .expect("Failed to load test config");
    assert!(!config.behavior.annotate);
    assert!(config.behavior.confirm);
    assert_eq!(config.versioning.bump, VersionBump::Major);
}

#[test]
fn test_machine_from_loaded_config() {
    let config = load_config(Some(BEHAVIOR_FIXTURE)).unwrap();
    let machine = VersionStateMachine::from_config(&config.versioning).unwrap();

    assert_eq!(machine.initial_version(), Version::new(1, 0, 0));
    assert_eq!(machine.bump(), VersionBump::Major);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/does_not_exist.toml"))).unwrap_err();
    assert!(matches!(err, VcmError::Io(_)));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[versioning\nbump = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, VcmError::Config(_)));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("vcm.toml"),
        "[versioning]\ninitial_version = \"2.0.0\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(config.unwrap().versioning.initial_version, "2.0.0");
}

#[test]
fn test_default_config_round_trips_through_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    let parsed = git_vcm::config::parse_config(&text).unwrap();
    assert_eq!(parsed, Config::default());
}
