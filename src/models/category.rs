//! Budget category model
//!
//! Categories are monthly spending allocations matched against transactions
//! by name. A reserved "Other" category always exists: aggregation code assumes
//! it as the bucket for anything uncategorized, so it can never be renamed or
//! deleted, only have its amount changed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;
use super::palette::OTHER_CATEGORY_COLOR;

/// Name of the reserved fallback category
pub const OTHER_CATEGORY_NAME: &str = "Other";

/// A monthly spending allocation with a display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Stable id, preserved across renames
    pub id: CategoryId,

    /// Category name, unique by convention (not enforced)
    pub name: String,

    /// Monthly budgeted amount
    pub amount: Money,

    /// Display color as a hex string, e.g. "#f97316"
    pub color: String,
}

impl BudgetCategory {
    /// Create a new category with a fresh id
    pub fn new(name: impl Into<String>, amount: Money, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            amount,
            color: color.into(),
        }
    }

    /// The reserved "Other" category present in every budget
    pub fn other() -> Self {
        Self {
            id: CategoryId::other(),
            name: OTHER_CATEGORY_NAME.to_string(),
            amount: Money::zero(),
            color: OTHER_CATEGORY_COLOR.to_string(),
        }
    }

    /// Check if this is the reserved fallback category
    pub fn is_other(&self) -> bool {
        self.id.is_other()
    }

    /// Check the name and amount are usable
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// Validation errors for budget categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
