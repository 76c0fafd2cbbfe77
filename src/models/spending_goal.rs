//! Spending goal model
//!
//! A spending goal caps what a linked budget category should spend in the
//! month its deadline falls in. The link is by category id; deleting the
//! category leaves the goal in place, it just stops matching any spending.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, SpendingGoalId};
use super::money::Money;

/// A monthly spending cap tied to a budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingGoal {
    /// Stable id for CLI references
    pub id: SpendingGoalId,

    /// Budget category this goal tracks (may be orphaned)
    pub category_id: CategoryId,

    /// Goal title
    pub title: String,

    /// Spending cap for the deadline month
    pub target_amount: Money,

    /// ISO-8601 deadline date string, empty for no deadline
    pub deadline: String,
}

impl SpendingGoal {
    /// Create a new goal with a fresh id
    pub fn new(
        category_id: CategoryId,
        title: impl Into<String>,
        target_amount: Money,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id: SpendingGoalId::generate(),
            category_id,
            title: title.into(),
            target_amount,
            deadline: deadline.into(),
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), super::savings_goal::GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(super::savings_goal::GoalValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl fmt::Display for SpendingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cap {})", self.title, self.target_amount)
    }
}
