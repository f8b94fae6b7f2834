//! CSV export
//!
//! Writes the ledger as `Date,Category,Description,Amount` with every data
//! field double-quoted and amounts to two decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Header row of the export
pub const CSV_HEADER: &str = "Date,Category,Description,Amount";

/// File name for an export made on `date`: `expenses_2024-01-05.csv`
pub fn default_filename(date: NaiveDate) -> String {
    format!("expenses_{}.csv", date.format("%Y-%m-%d"))
}

/// Write all expenses, in ledger order, as CSV
///
/// Fails with `EmptyExport` before writing anything when there are no expenses.
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<()> {
    if expenses.is_empty() {
        return Err(LedgerError::EmptyExport);
    }

    writeln!(writer, "{}", CSV_HEADER).map_err(|e| LedgerError::Export(e.to_string()))?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = expense.amount.to_decimal_string();
        csv_writer.write_record([
            date.as_str(),
            expense.category.as_str(),
            expense.description.as_str(),
            amount.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Render the export as a string
pub fn export_to_string(expenses: &[Expense]) -> LedgerResult<String> {
    let mut output = Vec::new();
    write_expenses_csv(expenses, &mut output)?;
    String::from_utf8(output).map_err(|e| LedgerError::Export(e.to_string()))
}

/// Write the export to `path`
///
/// No file is created for an empty ledger.
pub fn export_to_file(expenses: &[Expense], path: &Path) -> LedgerResult<()> {
    if expenses.is_empty() {
        return Err(LedgerError::EmptyExport);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_expenses_csv(expenses, &mut writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    tracing::info!(path = %path.display(), count = expenses.len(), "exported expenses");
    Ok(())
}
