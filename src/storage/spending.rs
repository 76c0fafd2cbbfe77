//! Spending goal store for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlanError;
use crate::models::{SpendingGoal, SpendingGoalId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable spending goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SpendingData {
    goals: Vec<SpendingGoal>,
}

/// Store for spending goal persistence
pub struct SpendingStore {
    path: PathBuf,
    data: RwLock<Vec<SpendingGoal>>,
}

impl SpendingStore {
    /// Create a new spending goal store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), PlanError> {
        let file_data: SpendingData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.goals;
        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = SpendingData { goals: data.clone() };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: &SpendingGoalId) -> Result<Option<SpendingGoal>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|g| &g.id == id).cloned())
    }

    /// Get all goals in stored order (newest first)
    pub fn get_all(&self) -> Result<Vec<SpendingGoal>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Add a goal at the front
    pub fn prepend(&self, goal: SpendingGoal) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, goal);
        Ok(())
    }

    /// Delete a goal
    pub fn delete(&self, id: &SpendingGoalId) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|g| &g.id != id);
        Ok(data.len() < before)
    }

    /// Replace the entire collection
    pub fn replace_all(&self, goals: Vec<SpendingGoal>) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = goals;
        Ok(())
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
