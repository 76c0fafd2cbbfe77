//! Snapshot CLI command
//!
//! Writes a point-in-time snapshot bundle (settings, budget, goals, and
//! transactions) as JSON or YAML for use outside the app.

use clap::Args;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::export::{export_snapshot_json, export_snapshot_yaml};
use crate::storage::Storage;

/// Arguments for the snapshot command
#[derive(Args)]
pub struct SnapshotArgs {
    /// Destination file
    pub file: PathBuf,

    /// Output format: json or yaml
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the snapshot command
pub fn handle_snapshot_command(
    storage: &Storage,
    settings: &Settings,
    args: SnapshotArgs,
) -> PlanResult<()> {
    let mut file = File::create(&args.file).map_err(|e| {
        PlanError::Export(format!("Failed to create {}: {}", args.file.display(), e))
    })?;

    match args.format.trim().to_lowercase().as_str() {
        "json" => export_snapshot_json(storage, settings, &mut file, args.pretty)?,
        "yaml" | "yml" => export_snapshot_yaml(storage, settings, &mut file)?,
        other => {
            return Err(PlanError::Validation(format!(
                "Unknown snapshot format '{}'. Use 'json' or 'yaml'.",
                other
            )))
        }
    }

    file.flush()
        .map_err(|e| PlanError::Export(e.to_string()))?;

    println!("Snapshot written: {}", args.file.display());

    Ok(())
}
