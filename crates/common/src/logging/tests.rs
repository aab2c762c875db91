//! Unit tests for the logging subsystem.

use std::{fs, path::Path};

use tracing_subscriber::layer::SubscriberExt;

use super::{
    FileLoggingConfig, LoggerConfig, LoggingInitConfig, Rotation, format_service_name,
    manager::build_layers,
};

#[test]
fn test_format_service_name() {
    assert_eq!(format_service_name("synchk", None), "synchk");
    assert_eq!(format_service_name("synchk", Some("prod")), "synchk%prod");
}

#[test]
fn test_logger_config_builder_pattern() {
    let config = LoggerConfig::new("test-service".to_owned())
        .with_json_logging(true)
        .with_file_logging(
            FileLoggingConfig::new("/tmp/logs".into(), "test".to_owned())
                .with_rotation(Rotation::HOURLY)
                .with_json_format(true),
        );

    assert_eq!(config.service_name, "test-service");
    assert!(config.stdout_config.json_format);
    let file = config.file_logging_config.expect("file logging");
    assert_eq!(file.file_name_prefix, "test");
    assert!(file.json_format);
}

#[test]
fn test_init_config_uses_default_prefix() {
    let dir = Path::new("/var/log/synchk");
    let init = LoggingInitConfig {
        service_base_name: "synchk",
        service_label: Some("dev"),
        log_dir: Some(dir),
        log_file_prefix: None,
        json_format: None,
        default_log_prefix: "synchk",
    };

    let config = init.to_logger_config();
    assert_eq!(config.service_name, "synchk%dev");
    assert!(!config.stdout_config.json_format);
    let file = config.file_logging_config.expect("file logging");
    assert_eq!(file.directory, dir);
    assert_eq!(file.file_name_prefix, "synchk");
}

#[test]
fn test_init_config_without_log_dir() {
    let init = LoggingInitConfig {
        service_base_name: "synchk",
        service_label: None,
        log_dir: None,
        log_file_prefix: Some("ignored"),
        json_format: Some(true),
        default_log_prefix: "synchk",
    };

    let config = init.to_logger_config();
    assert!(config.stdout_config.json_format);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_file_layer_writes_events() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggerConfig::new("test-service".to_owned()).with_file_logging(
        FileLoggingConfig::new(dir.path().to_path_buf(), "test.log".to_owned())
            .with_rotation(Rotation::NEVER),
    );

    let subscriber = tracing_subscriber::registry().with(build_layers(&config));
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(checkpoint = "abcd", "file layer event");
    });

    let contents = fs::read_to_string(dir.path().join("test.log")).unwrap();
    assert!(contents.contains("file layer event"));
    assert!(contents.contains("abcd"));
}
