//! Income category store for JSON storage
//!
//! Income categories are plain names. A fresh store starts with the default
//! set; new names are appended at the end.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlanError;
use crate::models::preferences::default_income_categories;

use super::file_io::{read_json, write_json_atomic};

/// Serializable income category data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    categories: Vec<String>,
}

impl Default for IncomeData {
    fn default() -> Self {
        Self {
            categories: default_income_categories(),
        }
    }
}

/// Store for income category persistence
pub struct IncomeStore {
    path: PathBuf,
    data: RwLock<Vec<String>>,
}

impl IncomeStore {
    /// Create a new income category store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(default_income_categories()),
        }
    }

    /// Read the category list into memory
    pub fn load(&self) -> Result<(), PlanError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.categories;
        Ok(())
    }

    /// Write the category list back out
    pub fn save(&self) -> Result<(), PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = IncomeData {
            categories: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all categories in stored order
    pub fn get_all(&self) -> Result<Vec<String>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a category at the end
    pub fn append(&self, name: String) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(name);
        Ok(())
    }

    /// Remove a category by exact name
    pub fn remove(&self, name: &str) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|c| c != name);
        Ok(data.len() < before)
    }

    /// Replace the entire collection
    pub fn replace_all(&self, categories: Vec<String>) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = categories;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, IncomeStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("income_categories.json");
        let store = IncomeStore::new(path);
        (temp_dir, store)
    }

    #[test]
    fn test_fresh_store_has_defaults() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let cats = store.get_all().unwrap();
        assert_eq!(cats, vec!["Salary", "Freelance", "Investment", "Gifts", "Other"]);
    }

    #[test]
    fn test_append_and_remove() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.append("Dividends".to_string()).unwrap();
        let cats = store.get_all().unwrap();
        assert_eq!(cats.last().map(String::as_str), Some("Dividends"));

        assert!(store.remove("Dividends").unwrap());
        assert!(!store.remove("Dividends").unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.append("Royalties".to_string()).unwrap();
        store.save().unwrap();

        let store2 = IncomeStore::new(temp_dir.path().join("income_categories.json"));
        store2.load().unwrap();
        assert_eq!(store2.get_all().unwrap().len(), 6);
    }
}
