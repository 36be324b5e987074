//! Tests for config file loading.

use retrace::RetraceConfig;
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = RetraceConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, RetraceConfig::default());
    assert!(*config.list_ascending());
    assert!(*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("retrace.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_file_values_override_defaults() {
    let file = write_config(
        r#"
list_ascending = false
mouse = false
log_file = "/tmp/retrace-test.log"
log_filter = "retrace_core=debug"
"#,
    );
    let config = RetraceConfig::from_file(file.path()).expect("valid config");
    assert!(!*config.list_ascending());
    assert!(!*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/retrace-test.log"));
    assert_eq!(config.log_filter(), "retrace_core=debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("list_ascending = \"sideways\"");
    let err = RetraceConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = RetraceConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_only_turn_things_off() {
    let config = RetraceConfig::default().with_overrides(true, false);
    assert!(!*config.list_ascending());
    assert!(*config.mouse());

    let config = RetraceConfig::default().with_overrides(false, true);
    assert!(*config.list_ascending());
    assert!(!*config.mouse());
}
