//! PocketPlan - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for PocketPlan: keep track
//! of income and expense transactions, plan a monthly budget with per-category
//! allocations, and work toward savings and spending goals. All data lives in
//! local JSON files; a key/value CSV codec provides whole-state backups and
//! the batch CSV format moves transactions in and out.
//!
//! # Crate layout
//!
//! The modules follow the data path:
//!
//! - `config`: settings file and data-directory layout
//! - `error`: the `PlanError` hierarchy
//! - `models`: Core data models (transactions, budget categories, goals)
//! - `storage`: JSON document stores with atomic writes
//! - `services`: operations and validation over the stores
//! - `reports`: Aggregation and terminal report formatting
//! - `backup`: Whole-state backup and restore (key/value CSV)
//! - `export`: Transaction batch CSV and snapshot bundles (JSON/YAML)
//! - `display`: Terminal table formatting helpers
//! - `cli`: Command handlers bridging clap to the services
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketplan::config::{paths::PlanPaths, settings::Settings};
//! use pocketplan::storage::Storage;
//!
//! let paths = PlanPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let settings = Settings::load_or_create(storage.paths())?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PlanError, PlanResult};
