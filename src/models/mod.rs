//! Core data models for PocketPlan
//!
//! This module contains all the data structures that represent the planning
//! domain: transactions, budget categories, goals, preferences, and the
//! assembled application state.

pub mod category;
pub mod ids;
pub mod money;
pub mod palette;
pub mod preferences;
pub mod savings_goal;
pub mod spending_goal;
pub mod state;
pub mod transaction;

pub use category::{BudgetCategory, OTHER_CATEGORY_NAME};
pub use ids::{CategoryId, SavingsGoalId, SpendingGoalId, TransactionId, OTHER_CATEGORY_ID};
pub use money::Money;
pub use palette::{color_for_index, color_for_name, CATEGORY_PALETTE};
pub use preferences::{AccentColor, Currency, FontSize, Theme, DEFAULT_INCOME_CATEGORIES};
pub use savings_goal::{SavingsGoal, SAVINGS_GOAL_CATEGORIES};
pub use spending_goal::SpendingGoal;
pub use state::AppState;
pub use transaction::{Transaction, TransactionKind};
