//! Report formatting utilities for terminal output
//!
//! Renders the summary header, category breakdown bars and insight cards.

use crate::reports::{CategoryBreakdown, Insight, Summary, MIN_EXPENSES_FOR_INSIGHTS};

/// Width of the breakdown bars, in characters
const BAR_WIDTH: usize = 30;

/// Format the running totals header
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total Spent:  {}\n",
        summary.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "This Month:   {}\n",
        summary.month_total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Expenses:     {}\n", summary.count));
    output
}

/// Format the category breakdown as labelled bars
pub fn format_breakdown(breakdown: &CategoryBreakdown, currency_symbol: &str) -> String {
    if breakdown.is_empty() {
        return "Add expenses to see category breakdown\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", format_header("Spending by Category", 60)));
    output.push_str(&separator(60));
    output.push('\n');

    for share in &breakdown.categories {
        output.push_str(&format!(
            "{} {:<15} {:>12} {:>7}\n",
            share.emoji,
            truncate(&share.category, 15),
            share.amount.format_with_symbol(currency_symbol),
            format!("{:.1}%", share.percentage)
        ));
        output.push_str(&format!(
            "   {}\n",
            format_bar(share.percentage, 100.0, BAR_WIDTH)
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>12}\n",
        "Total",
        breakdown.total.format_with_symbol(currency_symbol)
    ));

    output
}

/// Format insight cards
pub fn format_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return format!(
            "Add more expenses to see insights (at least {} needed)\n",
            MIN_EXPENSES_FOR_INSIGHTS
        );
    }

    let mut output = String::new();
    for (i, insight) in insights.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", insight.title));
        output.push_str(&format!("  {}\n", insight.value));
        output.push_str(&format!("  {}\n", insight.description));
    }
    output
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use crate::reports::{insights, CategoryBreakdown};
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        vec![
            Expense::new(Money::from_cents(1250), "food", "Lunch", date).unwrap(),
            Expense::new(Money::from_cents(4000), "transport", "Taxi", date).unwrap(),
        ]
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_breakdown_rendering() {
        let breakdown = CategoryBreakdown::generate(&sample());
        let text = format_breakdown(&breakdown, "$");

        let transport = text.find("transport").unwrap();
        let food = text.find("food").unwrap();
        assert!(transport < food);
        assert!(text.contains("76.2%"));
        assert!(text.contains("23.8%"));
        assert!(text.contains("$52.50"));
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = CategoryBreakdown::generate(&Vec::<Expense>::new());
        assert_eq!(
            format_breakdown(&breakdown, "$"),
            "Add expenses to see category breakdown\n"
        );
    }

    #[test]
    fn test_insight_cards() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let text = format_insights(&insights(&sample(), reference));
        assert!(text.contains("Top Spending Category\n  🚗 transport\n"));
        assert!(text.contains("Average Expense\n  $26.25\n"));

        assert!(format_insights(&[]).starts_with("Add more expenses"));
    }

    #[test]
    fn test_summary() {
        let summary = Summary::generate(&sample(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let text = format_summary(&summary, "$");
        assert!(text.contains("Total Spent:  $52.50"));
        assert!(text.contains("This Month:   $0.00"));
        assert!(text.contains("Expenses:     2"));
    }
}
