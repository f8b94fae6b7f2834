//! Export module for the expense ledger
//!
//! Provides CSV export of the recorded expenses (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{default_filename, export_to_file, export_to_string, write_expenses_csv, CSV_HEADER};
