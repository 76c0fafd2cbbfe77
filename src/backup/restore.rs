//! Backup restoration for PocketPlan
//!
//! Restores application state from a key/value CSV backup. The file is fully
//! decoded before anything is touched, a safety backup of the current state is
//! written, and only then is the decoded state applied and saved. A file that
//! fails to decode therefore leaves every store exactly as it was.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backup::manager::BackupManager;
use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::models::{AppState, Money};
use crate::storage::Storage;

use super::codec::decode_state;

/// Replaces live state with the contents of a backup file
pub struct RestoreManager<'a> {
    storage: &'a Storage,
}

impl<'a> RestoreManager<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Restore state from a backup file
    ///
    /// Overwrites all current data with the backup contents. A safety backup
    /// of the pre-restore state is created first.
    pub fn restore_from_file(
        &self,
        backup_path: &Path,
        settings: &mut Settings,
        backups: &BackupManager,
    ) -> PlanResult<RestoreSummary> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| PlanError::Io(format!("Failed to read backup file: {}", e)))?;

        self.restore_from_str(&contents, settings, backups)
    }

    /// Restore state from already-read backup text
    pub fn restore_from_str(
        &self,
        contents: &str,
        settings: &mut Settings,
        backups: &BackupManager,
    ) -> PlanResult<RestoreSummary> {
        // Decode first so a bad file aborts before anything changes.
        let state = decode_state(contents)?;

        let current = self.storage.app_state(settings)?;
        let (safety_backup, _) = backups.create_backup_with_retention(&current)?;

        settings.theme = state.theme;
        settings.accent_color = state.accent_color;
        settings.currency = state.currency;
        settings.font_size = state.font_size;

        self.storage.apply_state(&state)?;
        self.storage.save_all()?;
        settings.save(self.storage.paths())?;

        tracing::info!(
            transactions = state.transactions.len(),
            "Restored state from backup"
        );

        Ok(RestoreSummary {
            transactions: state.transactions.len(),
            budget_categories: state.budget.len(),
            savings_goals: state.savings_goals.len(),
            spending_goals: state.budget_goals.len(),
            income_categories: state.income_categories.len(),
            safety_backup: Some(safety_backup),
        })
    }

    /// Inspect a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> PlanResult<ValidationSummary> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| PlanError::Io(format!("Failed to read backup file: {}", e)))?;

        let state = decode_state(&contents)?;

        Ok(ValidationSummary {
            transactions: state.transactions.len(),
            budget_categories: state.budget.len(),
            savings_goals: state.savings_goals.len(),
            spending_goals: state.budget_goals.len(),
            monthly_income: state.monthly_income,
        })
    }
}

/// Counts of what a restore applied
#[derive(Debug)]
pub struct RestoreSummary {
    /// Number of transactions restored
    pub transactions: usize,
    /// Number of budget categories restored
    pub budget_categories: usize,
    /// Number of savings goals restored
    pub savings_goals: usize,
    /// Number of spending goals restored
    pub spending_goals: usize,
    /// Number of income category names restored
    pub income_categories: usize,
    /// Where the pre-restore state was saved
    pub safety_backup: Option<PathBuf>,
}

impl RestoreSummary {
    /// One-line description of what was restored
    pub fn describe(&self) -> String {
        format!(
            "Restored {} transactions, {} budget categories, {} savings goals, {} spending goals",
            self.transactions, self.budget_categories, self.savings_goals, self.spending_goals
        )
    }
}

/// What a backup file contains, without applying it
#[derive(Debug)]
pub struct ValidationSummary {
    pub transactions: usize,
    pub budget_categories: usize,
    pub savings_goals: usize,
    pub spending_goals: usize,
    pub monthly_income: Money,
}
