//! Expense list formatting
//!
//! Renders the filtered expense list as terminal rows.

use crate::models::{expense_emoji, format_date_with, Expense};
use crate::services::Filter;

use super::report::truncate;

/// Column width for descriptions in list rows
const DESCRIPTION_WIDTH: usize = 28;

/// Format a single expense as a list row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str, date_format: &str) -> String {
    let description = if expense.description.is_empty() {
        "(no description)"
    } else {
        expense.description.as_str()
    };

    format!(
        "{} {:8}  {:<width$}  {:<13}  {:<13}  {:>12}",
        expense_emoji(expense),
        expense.id.short(),
        truncate(description, DESCRIPTION_WIDTH),
        truncate(&expense.category, 13),
        format_date_with(expense.date, date_format),
        expense.amount.format_with_symbol(currency_symbol),
        width = DESCRIPTION_WIDTH
    )
}

/// Format the filtered list, or the empty-state message for the filter
pub fn format_expense_list(
    expenses: &[&Expense],
    filter: &Filter,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return match filter {
            Filter::All => "No expenses yet. Add your first expense with 'expenses add'.\n".into(),
            Filter::Category(category) => format!(
                "No {} expenses found. Try a different filter!\n",
                category
            ),
        };
    }

    let mut output = String::new();
    output.push_str(&format!(
        "   {:8}  {:<width$}  {:<13}  {:<13}  {:>12}\n",
        "ID",
        "Description",
        "Category",
        "Date",
        "Amount",
        width = DESCRIPTION_WIDTH
    ));
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format the details of a newly added or single expense
pub fn format_expense_details(expense: &Expense, currency_symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Category:    {} {}\n",
        expense_emoji(expense),
        expense.category
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!(
        "Date:        {}\n",
        format_date_with(expense.date, date_format)
    ));

    output
}
