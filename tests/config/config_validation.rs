use std::io::Write;

use endpoint_groups::config::{Config, ConfigError};
use endpoint_groups::logging;

fn write_config(toml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(toml.as_bytes()).expect("write config");
    file
}

#[test]
fn test_config_loads_from_file() {
    let file = write_config(
        r#"
        [logging]
        level = "debug"
        with_file_and_line = false

        [groups.users]
        prefix = "api/v2/users"

        [groups.reports]
        enabled = false
        "#,
    );

    let config = Config::from_file(file.path()).expect("valid config");

    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.with_file_and_line);
    assert_eq!(
        config.groups["users"].prefix.as_deref(),
        Some("api/v2/users")
    );
    assert!(!config.groups["reports"].enabled);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.toml");

    match Config::from_file(&path).unwrap_err() {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_file_fails_validation() {
    let file = write_config(
        r#"
        [groups.files]
        prefix = "static/*"
        "#,
    );

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPrefix { .. }));
}

#[test]
fn test_empty_prefix_override_is_allowed() {
    let file = write_config(
        r#"
        [groups.users]
        prefix = ""
        "#,
    );

    let config = Config::from_file(file.path()).expect("valid config");
    assert_eq!(config.groups["users"].prefix.as_deref(), Some(""));
}

#[test]
fn test_logging_rejects_bad_filter() {
    let config = Config::from_toml_str(
        r#"
        [logging]
        level = "endpoint_groups=verbose"
        "#,
    )
    .expect("level is not validated at load time");

    let err = logging::init(&config.logging).unwrap_err();
    assert!(matches!(err, logging::LoggingError::Filter(_)));
}
