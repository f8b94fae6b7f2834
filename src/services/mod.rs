//! Service layer for the expense ledger
//!
//! The service layer sits on top of the storage layer, handling validation,
//! filtering, and the command dispatch used by the presentation layer.

pub mod ledger;

pub use ledger::{Command, ExportFile, Filter, LedgerStore, NewExpense, Outcome};
