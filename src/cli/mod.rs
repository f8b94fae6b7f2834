//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_add, handle_clear, handle_delete, handle_list, parse_date};
pub use export::handle_export;
pub use report::{handle_breakdown, handle_categories, handle_insights, handle_summary};
