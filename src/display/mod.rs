//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and derived reports for
//! terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use report::{format_breakdown, format_insights, format_summary};
