//! Snapshot export as YAML
//!
//! Exports the full state snapshot to YAML format for human-readable review.

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::export::json::Snapshot;
use crate::storage::Storage;

/// Export the full state snapshot to YAML format
pub fn export_snapshot_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> PlanResult<()> {
    let snapshot = Snapshot::from_storage(storage, settings)?;

    // Header comment block
    writeln!(writer, "# PocketPlan Full State Snapshot")
        .map_err(|e| PlanError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| PlanError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)
        .map_err(|e| PlanError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlanError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| PlanError::Export(e.to_string()))?;

    Ok(())
}
