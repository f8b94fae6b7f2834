//! Expense Ledger - a personal expense tracker for the terminal
//!
//! This library records expenses, keeps them in a key-value slot as JSON,
//! and derives totals, a per-category breakdown, spending insights and a
//! CSV export from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories)
//! - `storage`: Key-value slots and the expense repository
//! - `services`: The ledger store and its command set
//! - `reports`: Totals, breakdown and insights
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use expense_ledger::services::LedgerStore;
//! use expense_ledger::storage::open_file_repository;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = LedgerStore::open(open_file_repository(&paths, &settings)?);
//! store.add("12.50", "food", "Lunch", chrono::Local::now().date_naive())?;
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

/// Directive used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_DIRECTIVE: &str = "expense_ledger=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, filtered by `RUST_LOG`)
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("tracing initialised twice without panicking");
    }
}
