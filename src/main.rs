use anyhow::Result;
use clap::{Parser, Subcommand};

use gastos_cli::cli::{
    handle_audit_command, handle_category_command, handle_expense_command, handle_history_command,
    handle_stats_command, CategoryCommands, ExpenseCommands,
};
use gastos_cli::config::{GastosPaths, Settings};
use gastos_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Gastos is a terminal-based personal expense tracker. It records \
                  what you spend, organizes expenses into categories, and shows \
                  where the money went, all from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "e")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Show spending statistics
    Stats {
        /// Restrict to one calendar month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show expense history, most recent first
    History {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show recent audit-log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and seed categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GastosPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Stats { month }) => {
            handle_stats_command(&storage, &settings, month)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, &settings, limit)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            let first_run = gastos_cli::storage::needs_initialization(&paths);

            println!("Initializing Gastos at: {}", paths.base_dir().display());
            gastos_cli::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");

            if first_run {
                println!();
                println!("Default categories have been created:");
                println!("  Comida, Transporte, Ocio, Hogar, Salud, Educación");
                println!();
                println!("Run 'gastos category list' to see them.");
            }
        }
        Some(Commands::Config) => {
            println!("Gastos Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Gastos - Terminal-based personal expense tracker");
            println!();
            println!("Run 'gastos --help' for usage information.");
            println!("Run 'gastos init' to set up the data directory.");
        }
    }

    Ok(())
}
