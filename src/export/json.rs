//! Full snapshot export as JSON
//!
//! Exports a read-only snapshot of the full application state with schema
//! versioning. The snapshot is the plain data bundle handed to anything that
//! wants all of settings plus the entity collections at once, such as an
//! assistant integration or an external analysis script.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::models::AppState;
use crate::storage::Storage;

/// Version written into every snapshot
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full state snapshot structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version of this snapshot
    pub schema_version: String,

    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    /// Version of the binary that wrote the file
    pub app_version: String,

    /// Settings and all entity collections
    pub state: AppState,

    /// Summary counts and date bounds
    pub metadata: SnapshotMetadata,
}

/// Snapshot metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Transactions included
    pub transaction_count: usize,

    /// Total number of budget categories
    pub budget_category_count: usize,

    /// Total number of savings goals
    pub savings_goal_count: usize,

    /// Total number of spending goals
    pub spending_goal_count: usize,

    /// Total number of income category names
    pub income_category_count: usize,

    /// Earliest transaction date present
    pub earliest_transaction: Option<String>,

    /// Latest transaction date present
    pub latest_transaction: Option<String>,
}

impl Snapshot {
    /// Create a new snapshot from storage
    pub fn from_storage(storage: &Storage, settings: &Settings) -> PlanResult<Self> {
        let state = storage.app_state(settings)?;
        Ok(Self::from_state(state))
    }

    /// Create a snapshot from an already-assembled state
    pub fn from_state(state: AppState) -> Self {
        let earliest_transaction = state
            .transactions
            .iter()
            .filter_map(|t| t.parsed_date())
            .min()
            .map(|d| d.to_string());

        let latest_transaction = state
            .transactions
            .iter()
            .filter_map(|t| t.parsed_date())
            .max()
            .map(|d| d.to_string());

        let metadata = SnapshotMetadata {
            transaction_count: state.transactions.len(),
            budget_category_count: state.budget.len(),
            savings_goal_count: state.savings_goals.len(),
            spending_goal_count: state.budget_goals.len(),
            income_category_count: state.income_categories.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            state,
            metadata,
        }
    }
}

/// Export the full state snapshot to JSON
pub fn export_snapshot_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> PlanResult<()> {
    let snapshot = Snapshot::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| PlanError::Export(e.to_string()))?;

    Ok(())
}
