//! Subcommand handlers
//!
//! Each submodule owns one top-level subcommand: its clap types and the
//! handler that drives the service layer for it.

pub mod backup;
pub mod budget;
pub mod config;
pub mod dashboard;
pub mod savings;
pub mod snapshot;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use dashboard::handle_dashboard_command;
pub use savings::{handle_savings_command, SavingsCommands};
pub use snapshot::{handle_snapshot_command, SnapshotArgs};
pub use transaction::{handle_txn_command, TxnCommands};
