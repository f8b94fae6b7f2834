use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_breakdown, handle_categories, handle_clear, handle_delete, handle_export,
    handle_insights, handle_list, handle_summary,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::services::LedgerStore;
use expense_ledger::storage::open_file_repository;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker for the terminal",
    long_about = "Record expenses by amount, category and date, then review totals, \
                  a per-category breakdown and spending insights, or export \
                  everything to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount in currency units (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (food, transport, entertainment, shopping, bills, health, other)
        category: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show this category ("all" shows everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense by ID (or unambiguous ID prefix)
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Delete every expense
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show total spent, this month's total and the expense count
    Summary,

    /// Show spending by category
    Breakdown,

    /// Show spending insights
    Insights,

    /// Export all expenses to CSV
    Export {
        /// Output file or directory (defaults to the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_ledger::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Populate the ledger from storage
    let repository = open_file_repository(&paths, &settings)?;
    let mut store = LedgerStore::open(repository);
    if let Some(warning) = store.take_load_warning() {
        eprintln!("Warning: {}. Starting with an empty ledger.", warning);
    }

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => handle_add(&mut store, &settings, amount, category, description, date)?,
        Some(Commands::List { category }) => handle_list(&mut store, &settings, category)?,
        Some(Commands::Delete { id }) => handle_delete(&mut store, &id)?,
        Some(Commands::Clear { yes }) => handle_clear(&mut store, yes)?,
        Some(Commands::Summary) => handle_summary(&store, &settings)?,
        Some(Commands::Breakdown) => handle_breakdown(&store, &settings)?,
        Some(Commands::Insights) => handle_insights(&store)?,
        Some(Commands::Export { output }) => handle_export(&mut store, &paths, output)?,
        Some(Commands::Categories) => handle_categories()?,
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Storage key:        {}", settings.storage_key);
            println!("  Quarantine corrupt: {}", settings.quarantine_corrupt);
        }
        None => {
            println!("Expense Ledger - personal expense tracking");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add 12.50 food -d Lunch' to record an expense.");
        }
    }

    Ok(())
}
