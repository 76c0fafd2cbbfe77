use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketplan::cli::{
    handle_backup_command, handle_budget_command, handle_config_command, handle_dashboard_command,
    handle_savings_command, handle_snapshot_command, handle_txn_command, BackupCommands,
    BudgetCommands, ConfigCommands, SavingsCommands, SnapshotArgs, TxnCommands,
};
use pocketplan::config::{paths::PlanPaths, settings::Settings};
use pocketplan::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocketplan",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "PocketPlan is a terminal-based personal finance tracker. Record \
                  income and expenses, plan a monthly budget, and follow savings \
                  and spending goals, all from the command line with local files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the all-time financial overview
    Dashboard,

    /// Record and inspect transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TxnCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(SavingsCommands),

    /// Backup and restore commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Write a JSON or YAML snapshot of all data
    Snapshot(SnapshotArgs),

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = PlanPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_txn_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            handle_savings_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Snapshot(args)) => {
            handle_snapshot_command(&storage, &settings, args)?;
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&storage, &mut settings, cmd)?;
        }
        None => {
            println!("PocketPlan - Terminal-based personal finance tracker");
            println!();
            println!("Run 'pocketplan --help' for usage information.");
            println!("Run 'pocketplan dashboard' for an overview of your finances.");
        }
    }

    Ok(())
}

/// Set up logging to stderr so piped output (CSV export, snapshots) stays
/// clean. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pocketplan=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
