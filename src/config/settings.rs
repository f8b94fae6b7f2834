//! User settings for the expense ledger
//!
//! Stored as `config.json` in the base directory. Every field has a default so
//! that a partial or missing file still yields usable settings.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::is_valid_date_format;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Key under which the expense list is persisted
pub const DEFAULT_STORAGE_KEY: &str = "expenses";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in lists and reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for expense lists (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Key-value slot holding the expense list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Copy unreadable stored data aside before starting with an empty ledger
    #[serde(default = "default_quarantine")]
    pub quarantine_corrupt: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    crate::models::DISPLAY_DATE_FORMAT.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_quarantine() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            storage_key: default_storage_key(),
            quarantine_corrupt: default_quarantine(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing a default file if none exists
    ///
    /// A `date_format` chrono cannot apply to a date is replaced (in memory)
    /// by the default format.
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        if !paths.settings_file().exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::info!(path = %paths.settings_file().display(), "created default settings");
            return Ok(settings);
        }

        let mut settings: Settings = read_json(paths.settings_file())
            .map_err(|e| LedgerError::Config(format!("Failed to load settings: {}", e)))?;

        if !is_valid_date_format(&settings.date_format) {
            tracing::warn!(
                date_format = %settings.date_format,
                "unusable date_format in settings, using the default"
            );
            settings.date_format = default_date_format();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
