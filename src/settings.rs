use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::db::DB_FILE;
use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    /// Email of the signed-in account, remembered between invocations.
    #[serde(default)]
    pub session_email: Option<String>,
    /// SQLite leaves foreign keys off unless asked; expenses may then
    /// reference emails with no account row.
    #[serde(default)]
    pub enforce_foreign_keys: bool,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            session_email: None,
            enforce_foreign_keys: false,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Settings {
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(DB_FILE)
    }
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_data_dir() -> PathBuf {
    home().join("Documents").join("spendlog")
}

/// `~/.config/spendlog/settings.json`
pub fn settings_path() -> PathBuf {
    home().join(".config").join("spendlog").join("settings.json")
}

/// Missing or unreadable files yield the defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring malformed settings");
        Settings::default()
    })
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| TrackerError::Settings(e.to_string()))?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

/// Expands a leading `~` and resolves existing paths to absolute ones.
pub fn shellexpand_path(path: &str) -> String {
    let expanded = match path.strip_prefix('~') {
        Some(rest) => format!("{}{rest}", home().display()),
        None => path.to_string(),
    };
    std::fs::canonicalize(&expanded)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or(expanded)
}
