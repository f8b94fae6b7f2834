//! Ledger store
//!
//! Owns the ordered expense list and the active category filter. Every
//! mutation re-serializes the whole list through the repository. A failed
//! save is returned to the caller as `StorageWriteFailed`, but the in-memory
//! change stays: memory is the source of truth until the next successful save.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::export;
use crate::models::{Expense, ExpenseId, Money};
use crate::reports::{insights, CategoryBreakdown, Insight, Summary};
use crate::storage::{ExpenseRepository, MemoryStore};

/// Which expenses the list view shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every expense
    #[default]
    All,
    /// Only expenses whose category string equals this one exactly
    Category(String),
}

impl Filter {
    /// Check whether an expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => expense.category == *category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    /// "all" selects everything; any other string is taken as a category
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Self::All,
            other => Self::Category(other.to_string()),
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// Raw user input for a new expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// The closed set of actions the presentation layer can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddExpense(NewExpense),
    DeleteExpense(ExpenseId),
    SetFilter(Filter),
    ClearAll,
    Export,
}

/// A rendered export, ready to be written wherever the caller likes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Expense),
    Deleted(bool),
    FilterChanged(Filter),
    Cleared,
    Exported(ExportFile),
}

/// The ledger: expenses in insertion order plus the active filter
pub struct LedgerStore {
    expenses: Vec<Expense>,
    filter: Filter,
    repository: ExpenseRepository,
    load_warning: Option<LedgerError>,
}

impl LedgerStore {
    /// Populate the ledger from `repository`
    ///
    /// Missing data starts an empty ledger. Corrupt data also starts an empty
    /// ledger; the problem is kept for [`LedgerStore::take_load_warning`].
    pub fn open(mut repository: ExpenseRepository) -> Self {
        let outcome = repository.load();
        tracing::info!(count = outcome.expenses.len(), "ledger opened");

        Self {
            expenses: outcome.expenses,
            filter: Filter::All,
            repository,
            load_warning: outcome.warning,
        }
    }

    /// A ledger backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::open(ExpenseRepository::with_default_key(Box::new(
            MemoryStore::new(),
        )))
    }

    /// Take the problem found while loading, if any (reported once)
    pub fn take_load_warning(&mut self) -> Option<LedgerError> {
        self.load_warning.take()
    }

    /// Record a new expense
    ///
    /// `amount` is the raw user input. It must parse as a finite number
    /// greater than zero and no larger than `MAX_INPUT_UNITS`, otherwise
    /// `InvalidAmount` is returned and the ledger is untouched. The value is
    /// stored exactly as given.
    pub fn add(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> LedgerResult<Expense> {
        let amount = Money::parse(amount).map_err(|e| {
            tracing::debug!(input = amount, "rejected amount");
            LedgerError::InvalidAmount(e.to_string())
        })?;

        let expense = Expense::new(amount, category, description, date)
            .map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

        self.expenses.push(expense.clone());
        tracing::info!(id = %expense.id, amount = %expense.amount, category, "expense added");
        self.sync()?;

        Ok(expense)
    }

    /// Record a new expense from a [`NewExpense`]
    pub fn add_new(&mut self, input: NewExpense) -> LedgerResult<Expense> {
        self.add(&input.amount, &input.category, &input.description, input.date)
    }

    /// Remove the expense with exactly this id
    ///
    /// Returns whether anything was removed. Nothing is saved when the id is
    /// unknown.
    pub fn remove(&mut self, id: &str) -> LedgerResult<bool> {
        let Some(position) = self.expenses.iter().position(|e| e.id.as_str() == id) else {
            return Ok(false);
        };

        let removed = self.expenses.remove(position);
        tracing::info!(id = %removed.id, "expense removed");
        self.sync()?;

        Ok(true)
    }

    /// Empty the ledger and delete the persisted key
    pub fn clear(&mut self) -> LedgerResult<()> {
        let count = self.expenses.len();
        self.expenses.clear();
        tracing::info!(count, "ledger cleared");
        self.repository.clear()
    }

    /// Set the active filter; any category string is accepted
    pub fn set_filter(&mut self, filter: Filter) {
        if let Filter::Category(category) = &filter {
            if crate::models::Category::from_key(category).is_none() {
                tracing::debug!(%category, "filter names no built-in category");
            }
        }
        self.filter = filter;
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Expenses passing the active filter, in ledger order
    pub fn filtered(&self) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    /// Every expense, in ledger order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Find an expense by exact id
    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id.as_str() == id)
    }

    /// Resolve a full id or unambiguous prefix to a stored id
    pub fn resolve_id(&self, query: &str) -> LedgerResult<ExpenseId> {
        let query = query.trim();
        if let Some(exact) = self.get(query) {
            return Ok(exact.id.clone());
        }

        let mut matches = self.expenses.iter().filter(|e| e.id.matches(query));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found.id.clone()),
            (Some(_), Some(_)) => Err(LedgerError::AmbiguousId(query.to_string())),
            (None, _) => Err(LedgerError::expense_not_found(query)),
        }
    }

    /// Header figures relative to `reference_date`
    pub fn summary(&self, reference_date: NaiveDate) -> Summary {
        Summary::generate(&self.expenses, reference_date)
    }

    /// Per-category breakdown of the whole ledger
    pub fn breakdown(&self) -> CategoryBreakdown {
        CategoryBreakdown::generate(&self.expenses)
    }

    /// Insights for the whole ledger relative to `reference_date`
    pub fn insights(&self, reference_date: NaiveDate) -> Vec<Insight> {
        insights(&self.expenses, reference_date)
    }

    /// Render the CSV export of the whole ledger
    pub fn export(&self, today: NaiveDate) -> LedgerResult<ExportFile> {
        let contents = export::export_to_string(&self.expenses)?;
        Ok(ExportFile {
            filename: export::default_filename(today),
            contents,
        })
    }

    /// Apply a command from the presentation layer
    pub fn dispatch(&mut self, command: Command) -> LedgerResult<Outcome> {
        match command {
            Command::AddExpense(input) => self.add_new(input).map(Outcome::Added),
            Command::DeleteExpense(id) => self.remove(id.as_str()).map(Outcome::Deleted),
            Command::SetFilter(filter) => {
                self.set_filter(filter.clone());
                Ok(Outcome::FilterChanged(filter))
            }
            Command::ClearAll => self.clear().map(|_| Outcome::Cleared),
            Command::Export => self
                .export(Local::now().date_naive())
                .map(Outcome::Exported),
        }
    }

    /// Persist the full list
    fn sync(&mut self) -> LedgerResult<()> {
        self.repository.save(&self.expenses)
    }
}
