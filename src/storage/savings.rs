//! Savings goal store for JSON storage
//!
//! Newest goals sit at the front, matching how transactions are stored.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlanError;
use crate::models::{SavingsGoal, SavingsGoalId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable savings goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SavingsData {
    goals: Vec<SavingsGoal>,
}

/// Store for savings goal persistence
pub struct SavingsStore {
    path: PathBuf,
    data: RwLock<Vec<SavingsGoal>>,
}

impl SavingsStore {
    /// Create a new savings goal store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), PlanError> {
        let file_data: SavingsData = read_json(&self.path)?;

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

        let file_data = SavingsData { goals: data.clone() };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: &SavingsGoalId) -> Result<Option<SavingsGoal>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|g| &g.id == id).cloned())
    }

    /// Get all goals in stored order (newest first)
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Add a goal at the front
    pub fn prepend(&self, goal: SavingsGoal) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, goal);
        Ok(())
    }

    /// Replace a goal in place, keeping its position
    pub fn update(&self, goal: SavingsGoal) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|g| g.id == goal.id) {
            Some(slot) => {
                *slot = goal;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a goal
    pub fn delete(&self, id: &SavingsGoalId) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|g| &g.id != id);
        Ok(data.len() < before)
    }

    /// Replace the entire collection
    pub fn replace_all(&self, goals: Vec<SavingsGoal>) -> Result<(), PlanError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SavingsStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings_goals.json");
        let store = SavingsStore::new(path);
        (temp_dir, store)
    }

    fn goal(title: &str) -> SavingsGoal {
        SavingsGoal::new(
            title,
            "Emergency",
            Money::zero(),
            Money::from_cents(100000),
            "2024-12-31",
            "#f97316",
        )
    }

    #[test]
    fn test_prepend_and_get() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let g = goal("Emergency fund");
        let id = g.id.clone();
        store.prepend(g).unwrap();

        let retrieved = store.get(&id).unwrap().unwrap();
        assert_eq!(retrieved.title, "Emergency fund");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_newest_first_order() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.prepend(goal("first")).unwrap();
        store.prepend(goal("second")).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");
    }

    #[test]
    fn test_update_funds() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let mut g = goal("Trip");
        let id = g.id.clone();
        store.prepend(g.clone()).unwrap();

        g.add_funds(Money::from_cents(5000));
        assert!(store.update(g).unwrap());

        let reloaded = store.get(&id).unwrap().unwrap();
        assert_eq!(reloaded.current_amount, Money::from_cents(5000));
    }

    #[test]
    fn test_delete_and_reload() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        let keep = goal("keep");
        let drop = goal("drop");
        let drop_id = drop.id.clone();
        store.prepend(keep).unwrap();
        store.prepend(drop).unwrap();

        assert!(store.delete(&drop_id).unwrap());
        store.save().unwrap();

        let store2 = SavingsStore::new(temp_dir.path().join("savings_goals.json"));
        store2.load().unwrap();
        assert_eq!(store2.count().unwrap(), 1);
        assert_eq!(store2.get_all().unwrap()[0].title, "keep");
    }
}
