//! Transaction store for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Entries are
//! kept in file order, newest first: additions go to the front, and batch
//! imports land as one contiguous block at the front.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlanError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of the transactions document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Store for transaction persistence
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new transaction store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), PlanError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.transactions;
        Ok(())
    }

    /// Write the current list to disk
    pub fn save(&self) -> Result<(), PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Find one transaction by id
    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| &t.id == id).cloned())
    }

    /// Get all transactions in stored order (newest first)
    pub fn get_all(&self) -> Result<Vec<Transaction>, PlanError> {
        let data = self
            .data
            .read()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Add a transaction at the front
    pub fn prepend(&self, txn: Transaction) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, txn);
        Ok(())
    }

    /// Add a batch at the front as one block, preserving its internal order
    pub fn prepend_batch(&self, batch: Vec<Transaction>) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.splice(0..0, batch);
        Ok(())
    }

    /// Replace a transaction in place, keeping its position
    ///
    /// Returns false if no transaction with that id exists.
    pub fn update(&self, txn: Transaction) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a transaction by id
    pub fn delete(&self, id: &TransactionId) -> Result<bool, PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| &t.id != id);
        Ok(data.len() < before)
    }

    /// Replace the entire collection
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), PlanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PlanError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = transactions;
        Ok(())
    }

    /// Number of stored transactions
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
    use crate::models::{Money, TransactionKind};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = TransactionStore::new(path);
        (temp_dir, store)
    }

    fn expense(description: &str, cents: i64) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            description,
            Money::from_cents(cents),
            "Food",
            "2024-01-05",
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.prepend(expense("first", 100)).unwrap();
        store.prepend(expense("second", 200)).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all[0].description, "second");
        assert_eq!(all[1].description, "first");
    }

    #[test]
    fn test_prepend_batch_keeps_block_order() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.prepend(expense("existing", 100)).unwrap();
        store
            .prepend_batch(vec![expense("a", 1), expense("b", 2)])
            .unwrap();

        let all = store.get_all().unwrap();
        let names: Vec<_> = all.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "existing"]);
    }

    #[test]
    fn test_update_keeps_position() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.prepend(expense("first", 100)).unwrap();
        let mut target = expense("second", 200);
        let id = target.id.clone();
        store.prepend(target.clone()).unwrap();

        target.description = "renamed".to_string();
        assert!(store.update(target).unwrap());

        let all = store.get_all().unwrap();
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].description, "renamed");
    }

    #[test]
    fn test_update_missing_returns_false() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        assert!(!store.update(expense("ghost", 100)).unwrap());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let txn = expense("to delete", 500);
        let id = txn.id.clone();
        store.prepend(txn).unwrap();
        assert_eq!(store.count().unwrap(), 1);

        assert!(store.delete(&id).unwrap());
        assert_eq!(store.count().unwrap(), 0);
        assert!(!store.delete(&id).unwrap());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.prepend(expense("older", 100)).unwrap();
        store.prepend(expense("newer", 200)).unwrap();
        store.save().unwrap();

        let path = temp_dir.path().join("transactions.json");
        let store2 = TransactionStore::new(path);
        store2.load().unwrap();

        let all = store2.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "newer");
        assert_eq!(all[1].description, "older");
    }
}
