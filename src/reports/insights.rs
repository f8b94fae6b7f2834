//! Spending insights
//!
//! Short derived statistics shown beside the ledger. Nothing is produced
//! until the ledger holds at least [`MIN_EXPENSES_FOR_INSIGHTS`] expenses.

use chrono::{Datelike, NaiveDate};

use crate::models::Expense;

use super::breakdown::CategoryBreakdown;
use super::summary::month_total;

/// Minimum ledger size before any insight is produced
pub const MIN_EXPENSES_FOR_INSIGHTS: usize = 2;

/// Which statistic an insight reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    TopCategory,
    AverageExpense,
    LargestExpense,
    DailyAverage,
}

/// A title/value/description triple ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub value: String,
    pub description: String,
}

impl Insight {
    fn new(
        kind: InsightKind,
        title: &str,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Compute insights for `expenses` relative to `reference_date`
///
/// Order is fixed: top category, average expense, largest expense, then the
/// current-month daily average when the reference month has any expense.
pub fn insights(expenses: &[Expense], reference_date: NaiveDate) -> Vec<Insight> {
    if expenses.len() < MIN_EXPENSES_FOR_INSIGHTS {
        return Vec::new();
    }

    let mut insights = Vec::with_capacity(4);
    let breakdown = CategoryBreakdown::generate(expenses);

    if let Some(top) = breakdown.top() {
        insights.push(Insight::new(
            InsightKind::TopCategory,
            "Top Spending Category",
            format!("{} {}", top.emoji, top.category),
            format!("{} ({:.1}% of total)", top.amount, top.percentage),
        ));
    }

    let count = u32::try_from(expenses.len()).unwrap_or(u32::MAX);
    let average = breakdown.total.divided_by(count);
    insights.push(Insight::new(
        InsightKind::AverageExpense,
        "Average Expense",
        average.to_string(),
        format!("Across {} transactions", expenses.len()),
    ));

    if let Some(largest) = largest_expense(expenses) {
        insights.push(Insight::new(
            InsightKind::LargestExpense,
            "Largest Expense",
            largest.amount.to_string(),
            format!("{} ({})", largest.description, largest.category),
        ));
    }

    let has_month_expense = expenses
        .iter()
        .any(|e| super::summary::same_month(e.date, reference_date));
    if has_month_expense {
        let day = reference_date.day();
        let daily = month_total(expenses, reference_date).divided_by(day);
        insights.push(Insight::new(
            InsightKind::DailyAverage,
            "Daily Average (This Month)",
            daily.to_string(),
            format!(
                "Based on {} days in {}",
                day,
                reference_date.format("%B")
            ),
        ));
    }

    insights
}

/// The single largest expense; ties go to the earliest in ledger order
pub fn largest_expense(expenses: &[Expense]) -> Option<&Expense> {
    expenses.iter().fold(None, |max: Option<&Expense>, e| match max {
        Some(current) if e.amount <= current.amount => Some(current),
        _ => Some(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn expense(cents: i64, category: &str, description: &str, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            description,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_needs_two_expenses() {
        assert!(insights(&[], date(2024, 1, 20)).is_empty());

        let one = vec![expense(1250, "food", "Lunch", 2024, 1, 5)];
        assert!(insights(&one, date(2024, 1, 20)).is_empty());
    }

    #[test]
    fn test_three_insights_outside_current_month() {
        let expenses = vec![
            expense(1250, "food", "Lunch", 2024, 1, 5),
            expense(4000, "transport", "Taxi", 2024, 1, 10),
        ];
        let result = insights(&expenses, date(2024, 3, 15));

        let kinds: Vec<InsightKind> = result.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::TopCategory,
                InsightKind::AverageExpense,
                InsightKind::LargestExpense
            ]
        );
    }

    #[test]
    fn test_four_insights_with_current_month_expense() {
        let expenses = vec![
            expense(1250, "food", "Lunch", 2024, 1, 5),
            expense(4000, "transport", "Taxi", 2024, 1, 10),
        ];
        let result = insights(&expenses, date(2024, 1, 20));
        assert_eq!(result.len(), 4);

        assert_eq!(result[0].title, "Top Spending Category");
        assert_eq!(result[0].value, "🚗 transport");
        assert_eq!(result[0].description, "$40.00 (76.2% of total)");

        assert_eq!(result[1].title, "Average Expense");
        assert_eq!(result[1].value, "$26.25");
        assert_eq!(result[1].description, "Across 2 transactions");

        assert_eq!(result[2].title, "Largest Expense");
        assert_eq!(result[2].value, "$40.00");
        assert_eq!(result[2].description, "Taxi (transport)");

        assert_eq!(result[3].title, "Daily Average (This Month)");
        assert_eq!(result[3].value, "$2.63");
        assert_eq!(result[3].description, "Based on 20 days in January");
    }

    #[test]
    fn test_daily_average_only_counts_reference_month() {
        let expenses = vec![
            expense(3000, "food", "", 2024, 2, 1),
            expense(9999, "bills", "", 2024, 1, 31),
            expense(1000, "food", "", 2023, 2, 1),
        ];
        let result = insights(&expenses, date(2024, 2, 10));
        let daily = result
            .iter()
            .find(|i| i.kind == InsightKind::DailyAverage)
            .unwrap();
        assert_eq!(daily.value, "$3.00");
    }

    #[test]
    fn test_largest_tie_goes_to_first() {
        let expenses = vec![
            expense(500, "food", "first", 2024, 1, 1),
            expense(700, "bills", "second", 2024, 1, 2),
            expense(700, "health", "third", 2024, 1, 3),
        ];
        assert_eq!(largest_expense(&expenses).unwrap().description, "second");
        assert!(largest_expense(&[]).is_none());
    }
}
