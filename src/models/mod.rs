//! Core data models for the expense ledger
//!
//! This module contains the plain data structures of the tracker: expenses,
//! their identifiers, money amounts, and the built-in category set.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{category_emoji, Category, UnknownCategory, DEFAULT_EMOJI};
pub use expense::{
    expense_emoji, format_amount, format_date, format_date_with, is_valid_date_format, Expense,
    ExpenseValidationError, DISPLAY_DATE_FORMAT,
};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError, MAX_INPUT_UNITS};
