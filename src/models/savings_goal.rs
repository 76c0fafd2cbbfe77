//! Savings goal model
//!
//! A savings goal tracks progress toward a target amount, independent of the
//! monthly budget. Progress is deliberately uncapped so an overfunded goal
//! reads as more than 100%.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsGoalId;
use super::money::Money;

/// Category labels offered when creating a savings goal
pub const SAVINGS_GOAL_CATEGORIES: [&str; 6] = [
    "Emergency",
    "Travel",
    "Transportation",
    "Home",
    "Investment",
    "Other",
];

/// A target amount with current progress and a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    /// Stable id assigned at creation
    pub id: SavingsGoalId,

    /// Goal title
    pub title: String,

    /// Goal category label (see [`SAVINGS_GOAL_CATEGORIES`])
    pub category: String,

    /// Amount saved so far
    pub current_amount: Money,

    /// Target amount
    pub target_amount: Money,

    /// ISO-8601 deadline date string, empty for no deadline
    pub deadline: String,

    /// Display color as a hex string
    pub color: String,
}

impl SavingsGoal {
    /// Create a new goal with a fresh id
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        current_amount: Money,
        target_amount: Money,
        deadline: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: SavingsGoalId::generate(),
            title: title.into(),
            category: category.into(),
            current_amount,
            target_amount,
            deadline: deadline.into(),
            color: color.into(),
        }
    }

    /// Progress toward the target as a percentage, uncapped
    ///
    /// A goal with no meaningful target reports 0.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.cents() <= 0 {
            return 0.0;
        }
        self.current_amount.cents() as f64 / self.target_amount.cents() as f64 * 100.0
    }

    /// Amount still needed, never negative
    pub fn remaining(&self) -> Money {
        let diff = self.target_amount - self.current_amount;
        if diff.is_negative() {
            Money::zero()
        } else {
            diff
        }
    }

    /// Record a contribution
    pub fn add_funds(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    /// Whether the target has been reached
    pub fn is_complete(&self) -> bool {
        self.target_amount.is_positive() && self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {}",
            self.title, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Goal title cannot be empty"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
