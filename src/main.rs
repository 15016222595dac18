use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::audit::ActivityLogger;
use budget_tracker::cli::{
    handle_add, handle_delete, handle_export, handle_history, handle_import, handle_layout,
    handle_list, handle_reset, handle_set_budget, handle_status, report_storage_warning,
    ExportFormat, LayoutChoice,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::models::EntryId;
use budget_tracker::services::{Tracker, TrackerOptions};
use budget_tracker::storage::Store;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal budget tracker",
    long_about = "Set a spending budget, record expenses against it and keep an eye \
                  on what is left. Runs as an interactive TUI or as one-shot commands."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Show budget, spent and remaining
    Status,

    /// Set the budget amount
    SetBudget {
        /// Budget (e.g., "500" or "$500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Record an expense
    Add {
        /// Amount (e.g., "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description (defaults to "Expense")
        description: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Entry id (see `budget list`)
        id: EntryId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Clear the budget and all expenses
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export a backup
    Export {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Replace all data with a JSON backup
    Import {
        /// Backup file
        file: PathBuf,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show or change the TUI layout
    Layout {
        #[arg(value_enum)]
        choice: Option<LayoutChoice>,
    },

    /// Show recent activity
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    budget_tracker::logging::init(&paths, &settings)?;

    let command = match cli.command {
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(Commands::History { limit }) => {
            handle_history(&ActivityLogger::new(paths.activity_log()), limit)?;
            return Ok(());
        }
        None => Commands::Tui,
        Some(command) => command,
    };

    let store = Store::open(&paths)?;
    let mut tracker = Tracker::load(store, TrackerOptions::from_settings(&settings, &paths));

    if let Commands::Tui = command {
        return budget_tracker::tui::run_tui(tracker, settings.export_dir(&paths));
    }
    report_storage_warning(&mut tracker);

    match command {
        Commands::Status => handle_status(&tracker)?,
        Commands::SetBudget { amount } => handle_set_budget(&mut tracker, &amount)?,
        Commands::Add {
            amount,
            description,
        } => handle_add(&mut tracker, &amount, description.as_deref())?,
        Commands::List { limit } => handle_list(&tracker, limit)?,
        Commands::Delete { id, force } => handle_delete(&mut tracker, id, force)?,
        Commands::Reset { force } => handle_reset(&mut tracker, force)?,
        Commands::Export { dir, format } => {
            let dir = dir.unwrap_or_else(|| settings.export_dir(&paths));
            handle_export(&tracker, &dir, format)?;
        }
        Commands::Import { file, force } => handle_import(&mut tracker, &file, force)?,
        Commands::Layout { choice } => handle_layout(&mut tracker, choice)?,
        Commands::Tui | Commands::History { .. } | Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Export directory: {}", settings.export_dir(paths).display());
    println!("Activity log:     {}", paths.activity_log().display());
    println!("Diagnostic log:   {}", paths.log_file().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Log level:       {}", settings.log_level);
}
