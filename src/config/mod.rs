//! Configuration module for PocketPlan
//!
//! Settings persistence and the data-directory layout:
//! - `paths`: where every file lives
//! - `settings`: the user preference file

pub mod paths;
pub mod settings;

pub use paths::PlanPaths;
pub use settings::Settings;
