//! Report CLI commands
//!
//! Read-only views derived from the ledger: totals, breakdown, insights, and
//! the fixed category table.

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_insights, format_summary};
use crate::error::LedgerResult;
use crate::models::Category;
use crate::services::LedgerStore;

/// Show total spent, this month's total and the expense count
pub fn handle_summary(store: &LedgerStore, settings: &Settings) -> LedgerResult<()> {
    let summary = store.summary(Local::now().date_naive());
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Show spending per category with bars
pub fn handle_breakdown(store: &LedgerStore, settings: &Settings) -> LedgerResult<()> {
    print!(
        "{}",
        format_breakdown(&store.breakdown(), &settings.currency_symbol)
    );
    Ok(())
}

/// Show spending insights
pub fn handle_insights(store: &LedgerStore) -> LedgerResult<()> {
    let insights = store.insights(Local::now().date_naive());
    print!("{}", format_insights(&insights));
    Ok(())
}

/// List the built-in categories
pub fn handle_categories() -> LedgerResult<()> {
    print!("{}", format_category_table());
    Ok(())
}

fn format_category_table() -> String {
    let mut output = String::from("Categories:\n");
    for category in Category::ALL {
        output.push_str(&format!("  {} {}\n", category.emoji(), category.key()));
    }
    output
}
