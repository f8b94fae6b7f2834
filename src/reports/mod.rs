//! Derived metrics for the expense ledger
//!
//! Pure functions over a slice (or any iterator) of expenses: running totals,
//! the per-category breakdown, and spending insights. Nothing here caches;
//! every call recomputes from the ledger it is given.

pub mod breakdown;
pub mod insights;
pub mod summary;

pub use breakdown::{category_breakdown, CategoryBreakdown, CategoryShare};
pub use insights::{insights, largest_expense, Insight, InsightKind, MIN_EXPENSES_FOR_INSIGHTS};
pub use summary::{month_total, total, Summary};
