//! `backup` subcommands
//!
//! Implements CLI commands for whole-state backup export, import, and
//! inspection. Managed backups live in the backup directory with a keep-N
//! retention policy; `export FILE` writes the same encoding anywhere.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{encode_state, BackupManager, RestoreManager};
use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::storage::Storage;

/// Save and restore complete application state
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Write a whole-state backup
    Export {
        /// Destination file. Without it, a timestamped backup is created in
        /// the backup directory and retention is applied.
        file: Option<PathBuf>,
    },

    /// Restore all data from a backup file
    Import {
        /// Backup filename or path (use 'latest' for the most recent)
        file: String,

        /// Restore without a confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List managed backups
    List {
        /// Include size and age for each backup
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Dispatch one `backup` subcommand
pub fn handle_backup_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: BackupCommands,
) -> PlanResult<()> {
    let manager = BackupManager::new(storage.paths(), settings.backup_keep);

    match cmd {
        BackupCommands::Export { file } => {
            let state = storage.app_state(settings)?;

            match file {
                Some(path) => {
                    std::fs::write(&path, encode_state(&state)).map_err(|e| {
                        PlanError::Export(format!(
                            "Failed to write {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    println!("Backup written: {}", path.display());
                }
                None => {
                    let (backup_path, deleted) =
                        manager.create_backup_with_retention(&state)?;
                    println!("Saved backup to {}", backup_path.display());
                    if !deleted.is_empty() {
                        println!(
                            "Pruned {} old backup(s) (keeping {}).",
                            deleted.len(),
                            settings.backup_keep
                        );
                    }
                }
            }
        }

        BackupCommands::Import { file, force } => {
            let backup_path = resolve_backup_path(&manager, storage, &file)?;

            // Validate before touching anything
            let restore = RestoreManager::new(storage);
            let validation = restore.validate_backup(&backup_path)?;
            let symbol = settings.currency_symbol();

            println!("Contents of {}:", backup_path.display());
            println!("  Transactions:      {}", validation.transactions);
            println!("  Budget categories: {}", validation.budget_categories);
            println!("  Savings goals:     {}", validation.savings_goals);
            println!("  Spending goals:    {}", validation.spending_goals);
            println!(
                "  Monthly income:    {}",
                validation.monthly_income.format_with_symbol(symbol)
            );
            println!();

            if !force {
                println!("Importing replaces every transaction, category, goal, and setting.");
                println!("Re-run with --force to continue:");
                println!("  pocketplan backup import {} --force", file);
                return Ok(());
            }

            let summary = restore.restore_from_file(&backup_path, settings, &manager)?;

            println!("Restore complete.");
            println!("{}", summary.describe());
            if let Some(safety) = &summary.safety_backup {
                println!();
                println!("Pre-restore state saved to: {}", safety.display());
            }
        }

        BackupCommands::List { verbose } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups yet. Create one with: pocketplan backup export");
                return Ok(());
            }

            println!("Backups in {}:", storage.paths().backup_dir().display());
            println!();

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);

                if verbose {
                    println!("{:2}. {}", i + 1, backup.filename);
                    println!(
                        "    created {} ({} ago)",
                        backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        format_duration(age)
                    );
                    println!("    {}", format_size(backup.size_bytes));
                } else {
                    println!(
                        "{:2}. {}  {} ago  {}",
                        i + 1,
                        backup.filename,
                        format_duration(age),
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!(
                "{} backup(s) on disk, keep limit {}",
                backups.len(),
                settings.backup_keep
            );
        }
    }

    Ok(())
}

/// Find the file meant by `backup`: the keyword `latest`, an explicit
/// path, or a filename (with or without extension) in the backup directory
fn resolve_backup_path(
    manager: &BackupManager,
    storage: &Storage,
    backup: &str,
) -> PlanResult<PathBuf> {
    // "latest" keyword
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| PlanError::NotFound {
                entity_type: "Backup",
                identifier: "latest".to_string(),
            });
    }

    // Full or relative path
    let path = PathBuf::from(backup);
    if path.exists() {
        return Ok(path);
    }

    // Filename in the backup directory
    let backup_path = storage.paths().backup_dir().join(backup);
    if backup_path.exists() {
        return Ok(backup_path);
    }

    // Bare name without the extension
    let with_ext = storage.paths().backup_dir().join(format!("{}.csv", backup));
    if with_ext.exists() {
        return Ok(with_ext);
    }

    Err(PlanError::NotFound {
        entity_type: "Backup",
        identifier: backup.to_string(),
    })
}

/// Compact age string: "45s", "12m", "3h", "2d", "1mo"
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }

    let months = days / 30;
    format!("{}mo", months)
}

/// Binary-unit size string with one decimal above 1 KB
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
