//! Budget store for JSON storage
//!
//! Manages the monthly income figure and the budget categories, which share
//! budget.json. A fresh store always contains the reserved "Other" category;
//! new categories are appended so listing order matches creation order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlanError;
use crate::models::{BudgetCategory, CategoryId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    monthly_income: Money,
    #[serde(default)]
    categories: Vec<BudgetCategory>,
}

impl Default for BudgetData {
    fn default() -> Self {
        Self {
            monthly_income: Money::zero(),
            categories: vec![BudgetCategory::other()],
        }
    }
}

/// Store for budget persistence
pub struct BudgetStore {
    path: PathBuf,
    data: RwLock<BudgetData>,
}

impl BudgetStore {
    /// Create a new budget store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetData::default()),
        }
    }

    /// Load budget data from disk
    ///
    /// The reserved "Other" category is re-added if the file on disk is
    /// missing it.
    pub fn load(&self) -> Result<(), PlanError> {
        let mut file_data: BudgetData = read_json(&self.path)?;

        if !file_data.categories.iter().any(|c| c.is_other()) {
            file_data.categories.push(BudgetCategory::other());
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;
        Ok(())
    }

    /// Save budget data to disk
    pub fn save(&self) -> Result<(), PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the monthly income figure
    pub fn monthly_income(&self) -> Result<Money, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.monthly_income)
    }

    /// Set the monthly income figure
    pub fn set_monthly_income(&self, income: Money) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.monthly_income = income;
        Ok(())
    }

    /// Get all categories in stored order
    pub fn get_categories(&self) -> Result<Vec<BudgetCategory>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.categories.clone())
    }

    /// Find a category by id
    pub fn get_category(&self, id: &CategoryId) -> Result<Option<BudgetCategory>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.categories.iter().find(|c| &c.id == id).cloned())
    }

    /// Append a category at the end
    pub fn append_category(&self, category: BudgetCategory) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.categories.push(category);
        Ok(())
    }

    /// Replace a category in place, keeping its position
    pub fn update_category(&self, category: BudgetCategory) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop a category from the document
    ///
    /// Sentinel protection is the caller's responsibility.
    pub fn delete_category(&self, id: &CategoryId) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.categories.len();
        data.categories.retain(|c| &c.id != id);
        Ok(data.categories.len() < before)
    }

    /// Replace both income and categories at once
    pub fn replace_all(
        &self,
        monthly_income: Money,
        categories: Vec<BudgetCategory>,
    ) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.monthly_income = monthly_income;
        data.categories = categories;
        Ok(())
    }
}
