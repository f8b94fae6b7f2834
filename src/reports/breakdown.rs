//! Category breakdown
//!
//! Groups spending by category string and computes each category's share of
//! the total.

use std::collections::HashMap;

use crate::models::{category_emoji, Expense, Money};

/// One category's slice of the total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category key as stored on the expenses
    pub category: String,
    /// Sum of amounts in this category
    pub amount: Money,
    /// Share of the total, 0-100 (0 when the total is zero)
    pub percentage: f64,
    /// Display glyph for the category
    pub emoji: &'static str,
    /// Number of expenses in this category
    pub count: usize,
}

/// Spending grouped by category, largest first
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub categories: Vec<CategoryShare>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Group `expenses` by category
    ///
    /// Categories are ordered by amount, descending. Ties keep the order in
    /// which the categories were first seen.
    pub fn generate<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut categories: Vec<CategoryShare> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut total = Money::zero();

        for expense in expenses {
            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                categories.push(CategoryShare {
                    category: expense.category.clone(),
                    amount: Money::zero(),
                    percentage: 0.0,
                    emoji: category_emoji(&expense.category),
                    count: 0,
                });
                categories.len() - 1
            });

            categories[slot].amount += expense.amount;
            categories[slot].count += 1;
            total += expense.amount;
        }

        for share in &mut categories {
            share.percentage = share.amount.percent_of(total);
        }

        // sort_by is stable, so equal amounts keep first-seen order
        categories.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self { categories, total }
    }

    /// The largest category, if any
    pub fn top(&self) -> Option<&CategoryShare> {
        self.categories.first()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Free-function form of [`CategoryBreakdown::generate`]
pub fn category_breakdown<'a, I>(expenses: I) -> CategoryBreakdown
where
    I: IntoIterator<Item = &'a Expense>,
{
    CategoryBreakdown::generate(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            "",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_two_category_example() {
        let expenses = vec![expense(1250, "food"), expense(4000, "transport")];
        let breakdown = category_breakdown(&expenses);

        assert_eq!(breakdown.total.cents(), 5250);
        assert_eq!(breakdown.categories.len(), 2);

        let transport = &breakdown.categories[0];
        assert_eq!(transport.category, "transport");
        assert_eq!(transport.amount.cents(), 4000);
        assert!((transport.percentage - 76.190476).abs() < 1e-4);
        assert_eq!(transport.emoji, "🚗");

        let food = &breakdown.categories[1];
        assert_eq!(food.category, "food");
        assert!((food.percentage - 23.809524).abs() < 1e-4);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let expenses = vec![
            expense(333, "food"),
            expense(333, "bills"),
            expense(334, "health"),
            expense(1, "other"),
            expense(12345, "food"),
        ];
        let breakdown = category_breakdown(&expenses);
        let sum: f64 = breakdown.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_groups_and_counts() {
        let expenses = vec![
            expense(100, "food"),
            expense(200, "transport"),
            expense(300, "food"),
        ];
        let breakdown = category_breakdown(&expenses);

        assert_eq!(breakdown.top().unwrap().category, "food");
        assert_eq!(breakdown.categories[0].amount.cents(), 400);
        assert_eq!(breakdown.categories[0].count, 2);
        assert_eq!(breakdown.categories[1].count, 1);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let expenses = vec![
            expense(500, "shopping"),
            expense(500, "bills"),
            expense(900, "health"),
            expense(500, "food"),
        ];
        let breakdown = category_breakdown(&expenses);
        let order: Vec<&str> = breakdown
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(order, vec!["health", "shopping", "bills", "food"]);
    }

    #[test]
    fn test_unknown_category_kept_verbatim() {
        let expenses = vec![expense(100, "gifts")];
        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown.categories[0].category, "gifts");
        assert_eq!(breakdown.categories[0].emoji, "📦");
        assert_eq!(breakdown.categories[0].percentage, 100.0);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        // Zero amounts can only arrive from stored data
        let mut free = expense(100, "food");
        free.amount = Money::zero();
        let mut also_free = expense(100, "bills");
        also_free.amount = Money::zero();

        let breakdown = category_breakdown(&vec![free, also_free]);
        assert_eq!(breakdown.categories.len(), 2);
        assert!(breakdown.categories.iter().all(|c| c.percentage == 0.0));
    }

    #[test]
    fn test_empty_ledger() {
        let breakdown = category_breakdown(&Vec::<Expense>::new());
        assert!(breakdown.is_empty());
        assert!(breakdown.top().is_none());
        assert_eq!(breakdown.total, Money::zero());
    }
}
