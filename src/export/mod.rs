//! Export module for PocketPlan
//!
//! Provides data export functionality in multiple formats:
//! - CSV: the transaction batch format, re-importable by this application
//! - JSON: machine-readable full state snapshot
//! - YAML: human-readable full state snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_transactions_csv, BATCH_HEADER};
pub use json::{export_snapshot_json, Snapshot, SnapshotMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
