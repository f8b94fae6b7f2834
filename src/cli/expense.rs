//! Expense CLI commands
//!
//! Add, list, delete and clear expenses. Every mutation goes through
//! [`LedgerStore::dispatch`].

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::services::{Command, Filter, LedgerStore, NewExpense, Outcome};

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD format.",
            input
        ))
    })
}

/// Record a new expense
pub fn handle_add(
    store: &mut LedgerStore,
    settings: &Settings,
    amount: String,
    category: String,
    description: Option<String>,
    date: Option<String>,
) -> LedgerResult<()> {
    let date = match date {
        Some(date) => parse_date(&date)?,
        None => Local::now().date_naive(),
    };

    let input = NewExpense {
        amount,
        category,
        description: description.unwrap_or_default(),
        date,
    };

    if let Outcome::Added(expense) = store.dispatch(Command::AddExpense(input))? {
        println!("Added expense {}", expense.id.short());
        print!(
            "{}",
            format_expense_details(&expense, &settings.currency_symbol, &settings.date_format)
        );
        if Category::from_key(&expense.category).is_none() {
            println!(
                "Note: '{}' is not a built-in category; it will be shown as 'other'.",
                expense.category
            );
        }
    }

    Ok(())
}

/// Show expenses passing the given filter
pub fn handle_list(
    store: &mut LedgerStore,
    settings: &Settings,
    category: Option<String>,
) -> LedgerResult<()> {
    let filter = match category {
        Some(category) => category.parse::<Filter>().unwrap_or_default(),
        None => Filter::All,
    };

    if let Filter::Category(category) = &filter {
        if Category::from_key(category).is_none() {
            tracing::warn!(%category, "filtering on a category outside the built-in set");
        }
    }

    store.dispatch(Command::SetFilter(filter))?;

    let shown = store.filtered();
    print!(
        "{}",
        format_expense_list(
            &shown,
            store.filter(),
            &settings.currency_symbol,
            &settings.date_format
        )
    );

    if !shown.is_empty() && !store.filter().is_all() {
        println!();
        println!("Showing {} of {} expenses", shown.len(), store.len());
    }

    Ok(())
}

/// Delete an expense by full id or unambiguous prefix
pub fn handle_delete(store: &mut LedgerStore, id: &str) -> LedgerResult<()> {
    let id = store.resolve_id(id)?;

    match store.dispatch(Command::DeleteExpense(id.clone()))? {
        Outcome::Deleted(true) => println!("Deleted expense {}", id.short()),
        _ => return Err(LedgerError::expense_not_found(id.as_str())),
    }

    Ok(())
}

/// Delete every expense; refuses unless `confirmed`
pub fn handle_clear(store: &mut LedgerStore, confirmed: bool) -> LedgerResult<()> {
    if !confirmed {
        return Err(LedgerError::Validation(
            "Clearing deletes every expense. Re-run with --yes to confirm.".into(),
        ));
    }

    let count = store.len();
    store.dispatch(Command::ClearAll)?;
    println!("Cleared {} expenses", count);

    Ok(())
}
