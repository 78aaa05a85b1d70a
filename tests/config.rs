use seqview::{Config, LogFormat, ViewerError};
use std::io::Write;

#[test]
fn loads_config_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "trace_level = \"debug\"").unwrap();
    writeln!(file, "handle_scheme = \"blob:gallery/\"").unwrap();
    writeln!(file, "log_format = \"pretty\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.handle_scheme, "blob:gallery");
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn empty_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(Config::from_file(file.path()).unwrap(), Config::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)));
}

#[test]
fn malformed_file_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "trace_level = [").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ViewerError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error:"));
}
