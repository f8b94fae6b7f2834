//! Running totals
//!
//! Sums over the ledger. The reference date is passed in by the caller so the
//! month figures are deterministic.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money};

/// Header figures shown above the expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of every expense
    pub total: Money,
    /// Sum of expenses dated in the reference month
    pub month_total: Money,
    /// Number of expenses
    pub count: usize,
}

impl Summary {
    /// Compute the summary for `expenses` relative to `reference_date`
    pub fn generate<'a, I>(expenses: I, reference_date: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut summary = Summary {
            total: Money::zero(),
            month_total: Money::zero(),
            count: 0,
        };

        for expense in expenses {
            summary.total += expense.amount;
            summary.count += 1;
            if same_month(expense.date, reference_date) {
                summary.month_total += expense.amount;
            }
        }

        summary
    }
}

/// Sum of all amounts
pub fn total<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Sum of amounts dated in the same calendar month and year as `reference_date`
pub fn month_total<'a, I>(expenses: I, reference_date: NaiveDate) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| same_month(e.date, reference_date))
        .map(|e| e.amount)
        .sum()
}

/// Whether two dates fall in the same calendar month of the same year
pub fn same_month(date: NaiveDate, reference_date: NaiveDate) -> bool {
    date.year() == reference_date.year() && date.month() == reference_date.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(cents: i64, category: &str, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            "",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total() {
        let expenses = vec![
            expense(1250, "food", 2024, 1, 5),
            expense(4000, "transport", 2024, 1, 10),
        ];
        assert_eq!(total(&expenses).cents(), 5250);
        assert_eq!(total(&Vec::<Expense>::new()), Money::zero());
    }

    #[test]
    fn test_month_total_matches_month_and_year() {
        let expenses = vec![
            expense(1000, "food", 2024, 1, 1),
            expense(2000, "food", 2024, 1, 31),
            expense(4000, "food", 2024, 2, 1),
            expense(8000, "food", 2023, 1, 15),
        ];
        assert_eq!(month_total(&expenses, date(2024, 1, 20)).cents(), 3000);
        assert_eq!(month_total(&expenses, date(2024, 2, 29)).cents(), 4000);
        assert_eq!(month_total(&expenses, date(2024, 3, 1)), Money::zero());
    }

    #[test]
    fn test_summary_agrees_with_free_functions() {
        let expenses = vec![
            expense(1250, "food", 2024, 1, 5),
            expense(4000, "transport", 2024, 2, 10),
            expense(500, "other", 2024, 2, 11),
        ];
        let reference = date(2024, 2, 15);

        let summary = Summary::generate(&expenses, reference);
        assert_eq!(summary.total, total(&expenses));
        assert_eq!(summary.month_total, month_total(&expenses, reference));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_works_on_filtered_views() {
        let expenses = vec![
            expense(1250, "food", 2024, 1, 5),
            expense(4000, "transport", 2024, 1, 10),
        ];
        let food_only: Vec<&Expense> = expenses.iter().filter(|e| e.category == "food").collect();
        assert_eq!(total(food_only).cents(), 1250);
    }
}
