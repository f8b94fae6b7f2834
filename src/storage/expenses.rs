//! Expense repository: the persistence adapter for the ledger
//!
//! Serializes the ordered expense list as a JSON array under a single key.
//! A missing key is an empty ledger. A payload that cannot be decoded also
//! yields an empty ledger, reported as `StorageCorrupt`; when quarantine is
//! enabled the raw bytes are first copied to `<key>.corrupt-<timestamp>`.
//! If the key cannot be read at all, writes are refused until a later load
//! succeeds, so the unread data is never overwritten.

use chrono::Utc;

use crate::config::settings::DEFAULT_STORAGE_KEY;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

use super::kv::KeyValueStore;

/// Result of reading the persisted ledger
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Expenses in stored order (empty when absent, corrupt or unreadable)
    pub expenses: Vec<Expense>,
    /// Set when stored data existed but could not be used
    pub warning: Option<LedgerError>,
    /// Key the corrupt payload was copied to, if any
    pub quarantined_as: Option<String>,
}

/// Repository persisting the expense list to a key-value store
pub struct ExpenseRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
    quarantine_corrupt: bool,
    read_failed: bool,
}

impl ExpenseRepository {
    /// Create a repository over `store`, persisting under `key`
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            quarantine_corrupt: true,
            read_failed: false,
        }
    }

    /// Repository under the default key
    pub fn with_default_key(store: Box<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// Enable or disable copying corrupt payloads aside on load
    pub fn quarantine_corrupt(mut self, enabled: bool) -> Self {
        self.quarantine_corrupt = enabled;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize the full ordered list and write it under the key
    pub fn save(&mut self, expenses: &[Expense]) -> LedgerResult<()> {
        self.ensure_writable()?;

        let payload = serde_json::to_vec(expenses)
            .map_err(|e| LedgerError::StorageWriteFailed(format!("serialization failed: {}", e)))?;

        self.store.set(&self.key, &payload).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to save expenses");
            LedgerError::StorageWriteFailed(e.to_string())
        })?;

        tracing::debug!(key = %self.key, count = expenses.len(), "saved expenses");
        Ok(())
    }

    /// Load the persisted list
    ///
    /// Never fails: absent data is an empty ledger, and unusable data is
    /// reported in the outcome. Undecodable bytes are quarantined; a failed
    /// read leaves the key untouched and blocks writes until a load succeeds.
    pub fn load(&mut self) -> LoadOutcome {
        let payload = match self.store.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                self.read_failed = false;
                tracing::debug!(key = %self.key, "no saved expenses found");
                return LoadOutcome::default();
            }
            Err(e) => {
                self.read_failed = true;
                tracing::warn!(key = %self.key, error = %e, "could not read saved expenses");
                return LoadOutcome {
                    warning: Some(e),
                    ..LoadOutcome::default()
                };
            }
        };
        self.read_failed = false;

        match serde_json::from_slice::<Vec<Expense>>(&payload) {
            Ok(expenses) => {
                tracing::debug!(key = %self.key, count = expenses.len(), "loaded expenses");
                LoadOutcome {
                    expenses,
                    ..LoadOutcome::default()
                }
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "saved expenses are corrupt, starting empty");
                let quarantined_as = if self.quarantine_corrupt {
                    self.quarantine(&payload)
                } else {
                    None
                };
                LoadOutcome {
                    expenses: Vec::new(),
                    warning: Some(LedgerError::StorageCorrupt(e.to_string())),
                    quarantined_as,
                }
            }
        }
    }

    /// Delete the persisted list entirely
    pub fn clear(&mut self) -> LedgerResult<()> {
        self.ensure_writable()?;

        self.store.remove(&self.key).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to remove saved expenses");
            LedgerError::StorageWriteFailed(e.to_string())
        })
    }

    fn ensure_writable(&self) -> LedgerResult<()> {
        if self.read_failed {
            return Err(LedgerError::StorageWriteFailed(format!(
                "'{}' could not be read, refusing to overwrite it",
                self.key
            )));
        }
        Ok(())
    }

    fn quarantine(&mut self, payload: &[u8]) -> Option<String> {
        let backup_key = format!(
            "{}.corrupt-{}",
            self.key,
            Utc::now().format("%Y%m%dT%H%M%S%.3f")
        );

        match self.store.set(&backup_key, payload) {
            Ok(()) => {
                tracing::warn!(backup = %backup_key, "corrupt payload quarantined");
                Some(backup_key)
            }
            Err(e) => {
                tracing::warn!(backup = %backup_key, error = %e, "could not quarantine corrupt payload");
                None
            }
        }
    }
}
