//! Goal services
//!
//! Business logic for both goal kinds. Savings goals track saved-up amounts
//! toward a target; spending goals cap one budget category for the month
//! their deadline falls in. The linked category must exist when a spending
//! goal is created, but deleting the category later leaves the goal orphaned
//! rather than deleting it.

use crate::error::{PlanError, PlanResult};
use crate::models::{
    color_for_index, CategoryId, Money, SavingsGoal, SavingsGoalId, SpendingGoal, SpendingGoalId,
    OTHER_CATEGORY_NAME,
};
use crate::storage::Storage;

/// Input for creating a savings goal
#[derive(Debug, Clone)]
pub struct CreateSavingsGoalInput {
    pub title: String,
    /// Category label, defaults to "Other" when empty
    pub category: String,
    pub current_amount: Money,
    pub target_amount: Money,
    /// ISO-8601 date string, empty for no deadline
    pub deadline: String,
}

/// Service for savings and spending goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    // Savings goals

    /// Create a savings goal at the head of the list
    pub fn add_savings_goal(&self, input: CreateSavingsGoalInput) -> PlanResult<SavingsGoal> {
        let category = {
            let trimmed = input.category.trim();
            if trimmed.is_empty() {
                OTHER_CATEGORY_NAME.to_string()
            } else {
                trimmed.to_string()
            }
        };

        let existing = self.storage.savings_goals.count()?;
        let goal = SavingsGoal::new(
            input.title.trim(),
            category,
            input.current_amount,
            input.target_amount,
            input.deadline,
            color_for_index(existing),
        );

        goal.validate()
            .map_err(|e| PlanError::Validation(e.to_string()))?;

        self.storage.savings_goals.prepend(goal.clone())?;
        self.storage.savings_goals.save()?;

        Ok(goal)
    }

    /// List all savings goals, newest first
    pub fn list_savings_goals(&self) -> PlanResult<Vec<SavingsGoal>> {
        self.storage.savings_goals.get_all()
    }

    /// Record a contribution toward a savings goal
    pub fn fund_savings_goal(&self, id: &SavingsGoalId, amount: Money) -> PlanResult<SavingsGoal> {
        let mut goal = self
            .storage
            .savings_goals
            .get(id)?
            .ok_or_else(|| PlanError::savings_goal_not_found(id.to_string()))?;

        goal.add_funds(amount);

        self.storage.savings_goals.update(goal.clone())?;
        self.storage.savings_goals.save()?;

        Ok(goal)
    }

    /// Delete a savings goal
    pub fn delete_savings_goal(&self, id: &SavingsGoalId) -> PlanResult<SavingsGoal> {
        let goal = self
            .storage
            .savings_goals
            .get(id)?
            .ok_or_else(|| PlanError::savings_goal_not_found(id.to_string()))?;

        self.storage.savings_goals.delete(id)?;
        self.storage.savings_goals.save()?;

        Ok(goal)
    }

    // Spending goals

    /// Create a spending goal linked to an existing budget category
    pub fn add_spending_goal(
        &self,
        category_id: &CategoryId,
        title: &str,
        target_amount: Money,
        deadline: &str,
    ) -> PlanResult<SpendingGoal> {
        let goal = SpendingGoal::new(category_id.clone(), title.trim(), target_amount, deadline);
        goal.validate()
            .map_err(|e| PlanError::Validation(e.to_string()))?;

        // The link must be valid at creation time; it may be orphaned later.
        self.storage
            .budget
            .get_category(category_id)?
            .ok_or_else(|| PlanError::category_not_found(category_id.to_string()))?;

        self.storage.spending_goals.prepend(goal.clone())?;
        self.storage.spending_goals.save()?;

        Ok(goal)
    }

    /// List all spending goals, newest first
    pub fn list_spending_goals(&self) -> PlanResult<Vec<SpendingGoal>> {
        self.storage.spending_goals.get_all()
    }

    /// Delete a spending goal
    pub fn delete_spending_goal(&self, id: &SpendingGoalId) -> PlanResult<SpendingGoal> {
        let goal = self
            .storage
            .spending_goals
            .get(id)?
            .ok_or_else(|| PlanError::spending_goal_not_found(id.to_string()))?;

        self.storage.spending_goals.delete(id)?;
        self.storage.spending_goals.save()?;

        Ok(goal)
    }
}
