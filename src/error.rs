//! Error types shared across the crate
//!
//! Everything user-facing funnels into [`PlanError`]. The CLI prints the
//! `Display` form directly, so variant messages are phrased for end users
//! rather than for logs.

use thiserror::Error;

/// Every failure the crate reports
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// Structural problems in a backup or import file (bad header, missing column)
    #[error("Format error: {0}")]
    Format(String),

    /// A value failed a model or decode check
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An entity with the same identity already exists
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    #[error("Export error: {0}")]
    Export(String),

    /// Persistence failures from the JSON stores
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlanError {
    /// A lookup failed for a transaction id.
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// A lookup failed for a category name.
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget category",
            identifier: identifier.into(),
        }
    }

    /// A lookup failed for a savings goal id.
    pub fn savings_goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Savings goal",
            identifier: identifier.into(),
        }
    }

    /// A lookup failed for a spending goal id.
    pub fn spending_goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Spending goal",
            identifier: identifier.into(),
        }
    }

    /// Whether this is any `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this is a `Validation` error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this is a structural `Format` error.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Shorthand result used throughout the crate
pub type PlanResult<T> = Result<T, PlanError>;
