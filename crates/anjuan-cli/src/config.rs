//! Operator settings: versioned JSON under the platform config directory.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Operator name written into 操作员 when the form leaves it blank.
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub api_url: String,
    /// Base64-encoded assist-API key. Kept only while `remember` is set;
    /// the encoding is shape, not protection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_encoded: Option<String>,
    #[serde(default)]
    pub remember: bool,
    /// Where the year directories, the case index, and the reference lists
    /// live. Added in v1; empty means [`default_case_root`].
    #[serde(default)]
    pub case_root: String,
}

impl AppConfig {
    /// Store the assist-API key, honoring the remember flag: a cleared
    /// flag or an empty key drops the stored value.
    pub fn set_api_key(&mut self, api_key: &str) {
        if api_key.is_empty() || !self.remember {
            self.api_key_encoded = None;
        } else {
            self.api_key_encoded = Some(STANDARD.encode(api_key));
        }
    }

    /// Decode the stored key. Forgotten, absent, or undecodable values all
    /// read as empty.
    pub fn api_key(&self) -> String {
        if !self.remember {
            return String::new();
        }
        self.api_key_encoded
            .as_deref()
            .and_then(|encoded| STANDARD.decode(encoded).ok())
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// The effective case root.
    pub fn case_root(&self) -> PathBuf {
        if self.case_root.is_empty() {
            default_case_root()
        } else {
            PathBuf::from(&self.case_root)
        }
    }
}

/// 工伤案卷 under the user's documents directory, or under the working
/// directory on platforms without one.
pub fn default_case_root() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("工伤案卷")
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("anjuan"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_config() -> eyre::Result<AppConfig> {
    load_config_from(&config_path()?)
}

/// Load settings from an explicit path. Absent settings are the defaults,
/// not an error; anything on disk is migrated before deserializing.
pub fn load_config_from(path: &Path) -> eyre::Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})."
        ));
    }

    // v0 → v1: add case_root (empty string; resolved to the default at use)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("case_root")
            .or_insert(serde_json::Value::String(String::new()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added case_root)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &AppConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Forget the operator and API settings. The case root is kept.
pub fn clear_config(config: &mut AppConfig) {
    config.operator.clear();
    config.api_url.clear();
    config.api_key_encoded = None;
    config.remember = false;
}

/// Redacted settings safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub operator: String,
    pub api_url: String,
    pub api_key_hint: Option<String>,
    pub remember: bool,
    pub case_root: String,
}

pub fn config_info(config: &AppConfig) -> ConfigInfo {
    ConfigInfo {
        operator: config.operator.clone(),
        api_url: config.api_url.clone(),
        api_key_hint: config
            .api_key_encoded
            .is_some()
            .then(|| redact_api_key(&config.api_key())),
        remember: config.remember,
        case_root: config.case_root().display().to_string(),
    }
}

fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
