//! JSON persistence primitives shared by every store
//!
//! Reads treat a missing file as an empty document so the first launch needs
//! no setup step. Writes stage the new document next to the target and rename
//! it into place, so a crash mid-write leaves the previous contents intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PlanError, PlanResult};

/// Load a JSON document, falling back to `T::default()` when the file does
/// not exist yet.
pub fn read_json<T, P>(path: P) -> PlanResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(PlanError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PlanError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace a JSON document on disk without ever exposing a half-written file.
///
/// The document is serialized to a staging file in the target's directory,
/// synced, and renamed over the target. Missing parent directories are
/// created first.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> PlanResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PlanError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    // The staging file must share the target's directory, or the rename
    // could cross filesystems and lose atomicity.
    let staging = path.with_extension("json.tmp");

    let file = File::create(&staging).map_err(|e| {
        PlanError::Storage(format!("Failed to create {}: {}", staging.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| PlanError::Storage(format!("Failed to serialize data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| PlanError::Storage(format!("Failed to flush data: {}", e)))?;
    file.sync_all()
        .map_err(|e| PlanError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        PlanError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
