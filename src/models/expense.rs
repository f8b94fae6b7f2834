//! Expense model
//!
//! An expense is plain data. Display helpers are free functions so that a
//! record read back from storage needs no reconstruction step.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::category::{category_emoji, Category};
use super::ids::ExpenseId;
use super::money::Money;

/// Date rendering used for lists: "Jan 5, 2024"
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, stable for the record's lifetime
    pub id: ExpenseId,

    /// Amount spent (always positive for records created here)
    pub amount: Money,

    /// Category key, stored verbatim
    pub category: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Date the money was spent
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id and creation timestamp
    ///
    /// Rejects amounts that are not strictly positive.
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ExpenseValidationError> {
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        Ok(Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
            description: description.into(),
            date,
            created_at: Utc::now(),
        })
    }

    /// Category used for display; unknown keys show as `Other`
    pub fn display_category(&self) -> Category {
        Category::display_for(&self.category)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Fixed two-decimal currency string, e.g. "$12.50"
pub fn format_amount(expense: &Expense) -> String {
    expense.amount.to_string()
}

/// Emoji for the expense's category, with a default glyph for unknown keys
pub fn expense_emoji(expense: &Expense) -> &'static str {
    category_emoji(&expense.category)
}

/// Locale-style date, e.g. "Jan 5, 2024"
pub fn format_date(expense: &Expense) -> String {
    format_date_with(expense.date, DISPLAY_DATE_FORMAT)
}

/// Render `date` with a user-supplied strftime pattern
///
/// Patterns chrono cannot apply to a bare date (unknown specifiers, time
/// fields) fall back to [`DISPLAY_DATE_FORMAT`].
pub fn format_date_with(date: NaiveDate, pattern: &str) -> String {
    try_format_date(date, pattern).unwrap_or_else(|| {
        try_format_date(date, DISPLAY_DATE_FORMAT).unwrap_or_else(|| date.to_string())
    })
}

/// Check that `pattern` can render a calendar date
pub fn is_valid_date_format(pattern: &str) -> bool {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .and_then(|sample| try_format_date(sample, pattern))
        .is_some()
}

fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense =
            Expense::new(Money::from_cents(1250), "food", "Lunch", date(2024, 1, 5)).unwrap();
        assert_eq!(expense.amount.cents(), 1250);
        assert_eq!(expense.category, "food");
        assert_eq!(expense.description, "Lunch");
        assert!(!expense.id.as_str().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let zero = Expense::new(Money::zero(), "food", "", date(2024, 1, 5));
        assert_eq!(
            zero,
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
        assert!(Expense::new(Money::from_cents(-100), "food", "", date(2024, 1, 5)).is_err());
    }

    #[test]
    fn test_display_helpers() {
        let expense =
            Expense::new(Money::from_cents(4000), "transport", "Taxi", date(2024, 1, 5)).unwrap();
        assert_eq!(format_amount(&expense), "$40.00");
        assert_eq!(expense_emoji(&expense), "🚗");
        assert_eq!(format_date(&expense), "Jan 5, 2024");

        let odd = Expense::new(Money::from_cents(100), "gifts", "", date(2024, 12, 25)).unwrap();
        assert_eq!(expense_emoji(&odd), "📦");
        assert_eq!(odd.display_category(), Category::Other);
        assert_eq!(odd.category, "gifts");
        assert_eq!(format_date(&odd), "Dec 25, 2024");
    }

    #[test]
    fn test_custom_date_formats() {
        let d = date(2024, 1, 5);
        assert_eq!(format_date_with(d, "%Y-%m-%d"), "2024-01-05");
        assert_eq!(format_date_with(d, "%d/%m/%Y"), "05/01/2024");

        // Unknown specifier and a time field both fall back
        assert_eq!(format_date_with(d, "%Q"), "Jan 5, 2024");
        assert_eq!(format_date_with(d, "%H:%M"), "Jan 5, 2024");

        assert!(is_valid_date_format("%b %-d, %Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%H"));
    }

    #[test]
    fn test_persisted_field_names() {
        let mut expense =
            Expense::new(Money::from_cents(1250), "food", "Lunch", date(2024, 1, 5)).unwrap();
        expense.created_at = Utc.with_ymd_and_hms(2024, 1, 5, 12, 30, 0).unwrap();

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["amount"], serde_json::json!(12.5));
        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["createdAt"], "2024-01-05T12:30:00Z");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_reads_browser_layout() {
        let json = r#"{
            "id": "1704456000000",
            "amount": 12.5,
            "category": "food",
            "description": "Lunch",
            "date": "2024-01-05",
            "createdAt": "2024-01-05T12:00:00.000Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_str(), "1704456000000");
        assert_eq!(expense.amount.cents(), 1250);
        assert_eq!(expense.date, date(2024, 1, 5));
    }
}
