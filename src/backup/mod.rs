//! Backup system for PocketPlan
//!
//! Whole-state backup and restore built around a key/value CSV encoding.
//!
//! # Moving parts
//!
//! Three pieces cooperate here:
//!
//! - `codec`: encodes the full [`AppState`](crate::models::AppState) into a
//!   two-column `key,value` CSV and decodes it back
//! - `BackupManager`: writes dated backup files and enforces a keep-N
//!   retention policy
//! - `RestoreManager`: decodes a backup file and applies it, taking a safety
//!   backup of the current state first
//!
//! # File format
//!
//! A backup is UTF-8 text with a `key,value` header. Scalar settings (theme,
//! accent color, currency, font size) are plain string rows, the monthly
//! income is a number row, and each entity collection is one row whose value
//! is the JSON-encoded collection. Values containing commas, quotes, or
//! newlines are quoted with internal quotes doubled.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketplan::backup::{BackupManager, RestoreManager};
//!
//! let backups = BackupManager::new(storage.paths(), settings.backup_keep);
//! let restore = RestoreManager::new(&storage);
//! let summary = restore.restore_from_file(&path, &mut settings, &backups)?;
//! println!("{}", summary.describe());
//! ```

pub mod codec;
mod manager;
mod restore;

pub use codec::{decode_state, encode_state, escape_csv, number_field, unescape_csv};
pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreSummary, ValidationSummary};
