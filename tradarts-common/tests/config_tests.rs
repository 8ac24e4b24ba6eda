//! Configuration loading and data folder resolution
//!
//! Tests that touch `TRADARTS_DATA_FOLDER` are marked `#[serial]` so they do
//! not race each other.

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;
use tradarts_common::config::{
    default_data_folder, DataFolderInitializer, DataFolderResolver, TomlConfig, DATA_FOLDER_ENV,
};

#[test]
fn test_default_data_folder_is_named_for_the_service() {
    let folder = default_data_folder();
    assert!(folder.to_string_lossy().contains("tradarts"));
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(DATA_FOLDER_ENV);

    let resolved = DataFolderResolver::new().resolve();
    assert_eq!(resolved, default_data_folder());
}

#[test]
#[serial]
fn test_cli_arg_has_highest_priority() {
    env::set_var(DATA_FOLDER_ENV, "/from/env");
    let config = TomlConfig {
        data_folder: Some(PathBuf::from("/from/toml")),
        ..Default::default()
    };

    let resolved = DataFolderResolver::new()
        .with_cli_arg(Some(PathBuf::from("/from/cli")))
        .with_config(&config)
        .resolve();

    env::remove_var(DATA_FOLDER_ENV);
    assert_eq!(resolved, PathBuf::from("/from/cli"));
}

#[test]
#[serial]
fn test_env_beats_toml() {
    env::set_var(DATA_FOLDER_ENV, "/from/env");
    let config = TomlConfig {
        data_folder: Some(PathBuf::from("/from/toml")),
        ..Default::default()
    };

    let resolved = DataFolderResolver::new().with_config(&config).resolve();

    env::remove_var(DATA_FOLDER_ENV);
    assert_eq!(resolved, PathBuf::from("/from/env"));
}

#[test]
#[serial]
fn test_blank_env_is_ignored() {
    env::set_var(DATA_FOLDER_ENV, "   ");
    let config = TomlConfig {
        data_folder: Some(PathBuf::from("/from/toml")),
        ..Default::default()
    };

    let resolved = DataFolderResolver::new().with_config(&config).resolve();

    env::remove_var(DATA_FOLDER_ENV);
    assert_eq!(resolved, PathBuf::from("/from/toml"));
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TomlConfig::load_or_default(Some(&dir.path().join("absent.toml")));
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_malformed_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();

    let config = TomlConfig::load_or_default(Some(&path));
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_config_file_is_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
bind = "0.0.0.0"
port = 8088

[session]
login_delay_ms = 0
register_delay_ms = 0
update_delay_ms = 0
"#,
    )
    .unwrap();

    let config = TomlConfig::load_or_default(Some(&path));
    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.session.login_delay_ms, 0);
}

#[test]
fn test_initializer_creates_nested_folder() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let init = DataFolderInitializer::new(nested.clone());
    init.ensure_directory_exists().unwrap();

    assert!(nested.is_dir());
    assert_eq!(init.session_file_path(), nested.join("user.json"));

    // Idempotent
    init.ensure_directory_exists().unwrap();
}
