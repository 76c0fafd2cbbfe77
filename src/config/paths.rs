//! Filesystem layout for PocketPlan's data
//!
//! All state lives under one base directory: settings at the top level,
//! JSON documents under `data/`, safety backups under `backups/`. The base
//! resolves from `POCKETPLAN_DATA_DIR` when set, otherwise from the
//! platform's config directory (`~/.config/pocketplan` on Linux,
//! `%APPDATA%\pocketplan` on Windows).

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PlanError;

/// Resolved locations of every file the application touches
#[derive(Debug, Clone)]
pub struct PlanPaths {
    base_dir: PathBuf,
}

impl PlanPaths {
    /// Resolve the layout for this machine.
    ///
    /// `POCKETPLAN_DATA_DIR` overrides the platform default when set.
    ///
    /// # Errors
    ///
    /// Fails only when no home directory can be determined.
    pub fn new() -> Result<Self, PlanError> {
        let base_dir = match std::env::var("POCKETPLAN_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Root the layout at an explicit directory instead of resolving one.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the JSON document stores
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory holding timestamped state backups
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Settings sit at the base, not under `data/`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Monthly income plus the category list share one document
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    pub fn savings_goals_file(&self) -> PathBuf {
        self.data_dir().join("savings_goals.json")
    }

    pub fn spending_goals_file(&self) -> PathBuf {
        self.data_dir().join("spending_goals.json")
    }

    pub fn income_categories_file(&self) -> PathBuf {
        self.data_dir().join("income_categories.json")
    }

    /// Create the base, data, and backup directories if any are missing.
    pub fn ensure_directories(&self) -> Result<(), PlanError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.backup_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                PlanError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        Ok(())
    }
}

/// Resolve the default data directory path for this platform
fn resolve_default_path() -> Result<PathBuf, PlanError> {
    ProjectDirs::from("", "", "pocketplan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PlanError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_layout_under_custom_base() {
        let temp = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp.path());
        assert_eq!(paths.data_dir(), temp.path().join("data"));
        assert_eq!(paths.backup_dir(), temp.path().join("backups"));
        assert_eq!(paths.settings_file(), temp.path().join("config.json"));
    }

    #[test]
    fn test_documents_land_in_data_dir() {
        let paths = PlanPaths::with_base_dir(PathBuf::from("/tmp/pp"));

        for file in [
            paths.transactions_file(),
            paths.budget_file(),
            paths.savings_goals_file(),
            paths.spending_goals_file(),
            paths.income_categories_file(),
        ] {
            assert!(file.starts_with(paths.data_dir()));
            assert_eq!(file.extension().unwrap(), "json");
        }
    }

    #[test]
    fn test_env_override_wins() {
        let temp = TempDir::new().unwrap();
        env::set_var("POCKETPLAN_DATA_DIR", temp.path());

        let paths = PlanPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp.path());

        env::remove_var("POCKETPLAN_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories_builds_the_tree() {
        let temp = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().is_dir());
        assert!(paths.backup_dir().is_dir());
    }
}
