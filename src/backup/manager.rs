//! Backup manager for PocketPlan
//!
//! Handles rolling safety backups of the full application state, written as
//! dated key/value CSV files. A backup is taken before every restore so a bad
//! import can always be undone.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::config::paths::PlanPaths;
use crate::error::{PlanError, PlanResult};
use crate::models::AppState;

use super::codec::encode_state;

/// One backup file on disk
#[derive(Debug, Clone)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    /// Creation time, recovered from the filename
    pub created_at: DateTime<Utc>,
    pub size_bytes: u64,
}

/// Writes timestamped state snapshots and prunes old ones
pub struct BackupManager {
    backup_dir: PathBuf,
    /// How many backups survive a retention pass
    keep: usize,
}

impl BackupManager {
    pub fn new(paths: &PlanPaths, keep: usize) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            keep,
        }
    }

    /// Encode the given state and write it as a new timestamped backup,
    /// returning the path it landed at.
    pub fn create_backup(&self, state: &AppState) -> PlanResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            PlanError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "state-{}-{:03}.csv",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let encoded = encode_state(state);
        fs::write(&backup_path, encoded)
            .map_err(|e| PlanError::Io(format!("Failed to write backup file: {}", e)))?;

        tracing::info!("Wrote backup {}", backup_path.display());

        Ok(backup_path)
    }

    /// Every backup in the directory, newest first
    pub fn list_backups(&self) -> PlanResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.backup_dir)
            .map_err(|e| PlanError::Io(format!("Failed to read backup directory: {}", e)))?;

        let mut backups = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| PlanError::Io(format!("Failed to scan backup directory: {}", e)))?
                .path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                backups.extend(parse_backup_info(&path));
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Delete backups beyond the configured keep count
    pub fn enforce_retention(&self) -> PlanResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for stale in self.list_backups()?.into_iter().skip(self.keep) {
            fs::remove_file(&stale.path)
                .map_err(|e| PlanError::Io(format!("Failed to prune old backup: {}", e)))?;
            deleted.push(stale.path);
        }

        Ok(deleted)
    }

    /// Take a backup, then prune down to the keep count
    pub fn create_backup_with_retention(
        &self,
        state: &AppState,
    ) -> PlanResult<(PathBuf, Vec<PathBuf>)> {
        let path = self.create_backup(state)?;
        let deleted = self.enforce_retention()?;
        Ok((path, deleted))
    }

    /// The newest backup, or `None` when the directory is empty
    pub fn get_latest_backup(&self) -> PlanResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

/// Build [`BackupInfo`] for one file, or `None` when the name does not match
/// the generated `state-<timestamp>.csv` pattern
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename.strip_prefix("state-")?.strip_suffix(".csv")?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Decode the timestamp portion of a backup filename.
///
/// Accepts `YYYYMMDD-HHMMSS`, with an optional `-mmm` millisecond suffix.
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let pieces: Vec<&str> = stamp.split('-').collect();
    let (date, time, millis) = match pieces.as_slice() {
        [date, time] => (*date, *time, 0),
        [date, time, millis] => (*date, *time, millis.parse().unwrap_or(0)),
        _ => return None,
    };

    if date.len() != 8 || time.len() != 6 {
        return None;
    }

    let ymd = NaiveDate::from_ymd_opt(
        date[0..4].parse().ok()?,
        date[4..6].parse().ok()?,
        date[6..8].parse().ok()?,
    )?;
    let hms = NaiveTime::from_hms_milli_opt(
        time[0..2].parse().ok()?,
        time[2..4].parse().ok()?,
        time[4..6].parse().ok()?,
        millis,
    )?;

    Some(DateTime::from_naive_utc_and_offset(
        NaiveDateTime::new(ymd, hms),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::codec::decode_state;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn backup_manager(keep: usize) -> (BackupManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let manager = BackupManager::new(&paths, keep);
        (manager, temp_dir)
    }

    #[test]
    fn test_create_backup_writes_file() {
        let (manager, _temp) = backup_manager(3);

        let backup_path = manager.create_backup(&AppState::default()).unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("state-"));
    }

    #[test]
    fn test_backup_contents_decode() {
        let (manager, _temp) = backup_manager(3);

        let mut state = AppState::default();
        state.monthly_income = crate::models::Money::from_cents(123456);
        let backup_path = manager.create_backup(&state).unwrap();

        let contents = fs::read_to_string(&backup_path).unwrap();
        let decoded = decode_state(&contents).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (manager, _temp) = backup_manager(5);

        for _ in 0..3 {
            manager.create_backup(&AppState::default()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 3);
        assert!(backups[0].created_at >= backups[1].created_at);
        assert!(backups[1].created_at >= backups[2].created_at);
    }

    #[test]
    fn test_retention_keeps_configured_count() {
        let (manager, _temp) = backup_manager(2);

        for _ in 0..6 {
            manager.create_backup(&AppState::default()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 4);

        let remaining = manager.list_backups().unwrap();
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn test_latest_backup_tracks_new_files() {
        let (manager, _temp) = backup_manager(3);

        assert!(manager.get_latest_backup().unwrap().is_none());

        let path = manager.create_backup(&AppState::default()).unwrap();
        let latest = manager.get_latest_backup().unwrap().unwrap();
        assert_eq!(latest.path, path);
    }

    #[test]
    fn test_timestamp_parsing_from_filenames() {
        let timestamp = parse_backup_timestamp("20240315-091205").unwrap();
        assert_eq!(timestamp.year(), 2024);
        assert_eq!(timestamp.month(), 3);
        assert_eq!(timestamp.day(), 15);

        let timestamp = parse_backup_timestamp("20240315-091205-087").unwrap();
        assert_eq!(timestamp.timestamp_subsec_millis(), 87);

        assert!(parse_backup_timestamp("notadate").is_none());
        assert!(parse_backup_timestamp("20240315").is_none());
    }

    #[test]
    fn test_list_backups_on_fresh_dir() {
        let (manager, _temp) = backup_manager(3);
        assert!(manager.list_backups().unwrap().is_empty());
    }
}
