use std::fs;

use tempfile::TempDir;

use anjuan_cli::config::{
    clear_config, config_info, load_config_from, save_config_to, AppConfig,
};

fn filled_config() -> AppConfig {
    let mut config = AppConfig {
        operator: "王调查".to_string(),
        api_url: "https://api.example.com".to_string(),
        remember: true,
        case_root: "/data/工伤案卷".to_string(),
        ..AppConfig::default()
    };
    config.set_api_key("sk-test-1234567890");
    config
}

#[test]
fn round_trip_preserves_all_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let config = filled_config();
    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.operator, "王调查");
    assert_eq!(loaded.api_url, "https://api.example.com");
    assert!(loaded.remember);
    assert_eq!(loaded.api_key(), "sk-test-1234567890");
    assert_eq!(loaded.case_root(), std::path::Path::new("/data/工伤案卷"));
}

#[test]
fn stored_key_is_not_plain_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    save_config_to(&path, &filled_config()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("api_key_encoded"));
    assert!(!text.contains("sk-test-1234567890"));
}

#[test]
fn key_is_dropped_when_remember_is_off() {
    let mut config = AppConfig::default();
    config.set_api_key("sk-test-1234567890");

    assert!(config.api_key_encoded.is_none());
    assert_eq!(config.api_key(), "");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config_from(&dir.path().join("config.json")).unwrap();

    assert!(loaded.operator.is_empty());
    assert!(loaded.case_root.is_empty());
    assert!(!loaded.remember);
}

#[test]
fn v0_config_is_migrated_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"operator":"王调查","api_url":"","remember":false}"#,
    )
    .unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.operator, "王调查");
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.case_root, "");

    save_config_to(&path, &loaded).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"config_version\": 1"));
}

#[test]
fn newer_config_version_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"config_version": 99}"#).unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn clearing_keeps_the_case_root() {
    let mut config = filled_config();
    clear_config(&mut config);

    assert!(config.operator.is_empty());
    assert!(config.api_url.is_empty());
    assert!(config.api_key_encoded.is_none());
    assert!(!config.remember);
    assert_eq!(config.case_root, "/data/工伤案卷");
}

#[test]
fn default_case_root_is_the_archive_dir() {
    assert!(AppConfig::default().case_root().ends_with("工伤案卷"));
}

#[test]
fn info_redacts_the_key() {
    let info = config_info(&filled_config());
    assert_eq!(info.api_key_hint.as_deref(), Some("sk-t...7890"));

    let info = config_info(&AppConfig::default());
    assert!(info.api_key_hint.is_none());
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_readable_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    save_config_to(&path, &filled_config()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
