//! Storage layer for the expense ledger
//!
//! Provides the key-value slot abstraction, its file and in-memory backends,
//! and the expense repository that serializes the ledger into a slot.

pub mod expenses;
pub mod file_io;
pub mod kv;

pub use expenses::{ExpenseRepository, LoadOutcome};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;

/// Open the on-disk repository described by `paths` and `settings`
pub fn open_file_repository(
    paths: &LedgerPaths,
    settings: &Settings,
) -> Result<ExpenseRepository, LedgerError> {
    paths.ensure_directories()?;

    let store = FileStore::new(paths.data_dir());
    // Reject a bad key up front rather than on the first save
    store.path_for(&settings.storage_key)?;

    Ok(
        ExpenseRepository::new(Box::new(store), settings.storage_key.clone())
            .quarantine_corrupt(settings.quarantine_corrupt),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let repo = open_file_repository(&paths, &Settings::default()).unwrap();

        assert!(paths.data_dir().exists());
        assert_eq!(repo.key(), "expenses");
    }

    #[test]
    fn test_open_rejects_bad_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            storage_key: "../outside".into(),
            ..Settings::default()
        };

        assert!(matches!(
            open_file_repository(&paths, &settings),
            Err(LedgerError::Config(_))
        ));
    }
}
