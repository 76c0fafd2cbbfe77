//! Monthly budget operations
//!
//! Business logic for the monthly budget: the income figure and the category
//! list with its reserved "Other" bucket. New categories get a color from the
//! fixed palette by current position, matching how dashboard charts cycle.

use crate::error::{PlanError, PlanResult};
use crate::models::{color_for_index, BudgetCategory, CategoryId, Money};
use crate::storage::Storage;

/// Owns the category list and the monthly income figure
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the monthly income figure
    pub fn monthly_income(&self) -> PlanResult<Money> {
        self.storage.budget.monthly_income()
    }

    /// Set the monthly income figure
    pub fn set_monthly_income(&self, income: Money) -> PlanResult<()> {
        self.storage.budget.set_monthly_income(income)?;
        self.storage.budget.save()
    }

    /// List all budget categories in display order
    pub fn list_categories(&self) -> PlanResult<Vec<BudgetCategory>> {
        self.storage.budget.get_categories()
    }

    /// Look up a category by its id
    pub fn get_category(&self, id: &CategoryId) -> PlanResult<Option<BudgetCategory>> {
        self.storage.budget.get_category(id)
    }

    /// Look up a category by name, ignoring case
    pub fn get_category_by_name(&self, name: &str) -> PlanResult<Option<BudgetCategory>> {
        let categories = self.storage.budget.get_categories()?;
        Ok(categories
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim())))
    }

    /// Accept either a name or an id string and find the category
    pub fn find_category(&self, identifier: &str) -> PlanResult<Option<BudgetCategory>> {
        if let Some(category) = self.get_category_by_name(identifier)? {
            return Ok(Some(category));
        }

        self.storage
            .budget
            .get_category(&CategoryId::from_raw(identifier))
    }

    /// Add a new category at the end of the list
    ///
    /// The display color is taken from the fixed palette, indexed by how many
    /// categories already exist.
    pub fn add_category(&self, name: &str, amount: Money) -> PlanResult<BudgetCategory> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.get_category_by_name(name)?.is_some() {
            return Err(PlanError::Duplicate {
                entity_type: "Budget category",
                identifier: name.to_string(),
            });
        }

        let existing = self.storage.budget.get_categories()?;
        let category = BudgetCategory::new(name, amount, color_for_index(existing.len()));

        category
            .validate()
            .map_err(|e| PlanError::Validation(e.to_string()))?;

        self.storage.budget.append_category(category.clone())?;
        self.storage.budget.save()?;

        Ok(category)
    }

    /// Rename a category
    ///
    /// The reserved "Other" category cannot be renamed.
    pub fn rename_category(&self, id: &CategoryId, new_name: &str) -> PlanResult<BudgetCategory> {
        let mut category = self
            .storage
            .budget
            .get_category(id)?
            .ok_or_else(|| PlanError::category_not_found(id.to_string()))?;

        if category.is_other() {
            return Err(PlanError::Validation(
                "The Other category cannot be renamed".into(),
            ));
        }

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(PlanError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if let Some(existing) = self.get_category_by_name(new_name)? {
            if existing.id != category.id {
                return Err(PlanError::Duplicate {
                    entity_type: "Budget category",
                    identifier: new_name.to_string(),
                });
            }
        }

        category.name = new_name.to_string();
        self.storage.budget.update_category(category.clone())?;
        self.storage.budget.save()?;

        Ok(category)
    }

    /// Set a category's budgeted amount
    ///
    /// Allowed for every category including "Other".
    pub fn set_category_amount(&self, id: &CategoryId, amount: Money) -> PlanResult<BudgetCategory> {
        let mut category = self
            .storage
            .budget
            .get_category(id)?
            .ok_or_else(|| PlanError::category_not_found(id.to_string()))?;

        category.amount = amount;
        self.storage.budget.update_category(category.clone())?;
        self.storage.budget.save()?;

        Ok(category)
    }

    /// Remove a category from the budget
    ///
    /// The reserved "Other" category cannot be deleted. Spending goals that
    /// pointed at the deleted category are left in place, orphaned.
    pub fn delete_category(&self, id: &CategoryId) -> PlanResult<()> {
        let category = self
            .storage
            .budget
            .get_category(id)?
            .ok_or_else(|| PlanError::category_not_found(id.to_string()))?;

        if category.is_other() {
            return Err(PlanError::Validation(
                "The Other category cannot be deleted".into(),
            ));
        }

        self.storage.budget.delete_category(id)?;
        self.storage.budget.save()?;

        Ok(())
    }
}
