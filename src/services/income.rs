//! Income category service
//!
//! Manages the list of income category names offered when recording income.
//! The list is seeded with defaults on first run and keeps insertion order.

use crate::error::{PlanError, PlanResult};
use crate::storage::Storage;

/// Service for income category names
pub struct IncomeCategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeCategoryService<'a> {
    /// Create a new income category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all income categories in display order
    pub fn list(&self) -> PlanResult<Vec<String>> {
        self.storage.income_categories.get_all()
    }

    /// Add a category name at the end of the list
    pub fn add(&self, name: &str) -> PlanResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::Validation(
                "Income category name cannot be empty".into(),
            ));
        }

        let existing = self.storage.income_categories.get_all()?;
        if existing.iter().any(|c| c.eq_ignore_ascii_case(name)) {
            return Err(PlanError::Duplicate {
                entity_type: "Income category",
                identifier: name.to_string(),
            });
        }

        self.storage.income_categories.append(name.to_string())?;
        self.storage.income_categories.save()?;

        Ok(name.to_string())
    }

    /// Remove a category name (case-insensitive match)
    pub fn remove(&self, name: &str) -> PlanResult<String> {
        let existing = self.storage.income_categories.get_all()?;
        let canonical = existing
            .iter()
            .find(|c| c.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .ok_or_else(|| PlanError::NotFound {
                entity_type: "Income category",
                identifier: name.trim().to_string(),
            })?;

        self.storage.income_categories.remove(&canonical)?;
        self.storage.income_categories.save()?;

        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlanPaths;
    use crate::models::DEFAULT_INCOME_CATEGORIES;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_defaults_seeded() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeCategoryService::new(&storage);

        let listed = service.list().unwrap();
        assert_eq!(listed, DEFAULT_INCOME_CATEGORIES.to_vec());
    }

    #[test]
    fn test_add_appends() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeCategoryService::new(&storage);

        service.add("Royalties").unwrap();
        let listed = service.list().unwrap();
        assert_eq!(listed.last().map(String::as_str), Some("Royalties"));
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeCategoryService::new(&storage);

        let err = service.add(" salary ").unwrap_err();
        assert!(matches!(err, PlanError::Duplicate { .. }));
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeCategoryService::new(&storage);

        let removed = service.remove("FREELANCE").unwrap();
        assert_eq!(removed, "Freelance");
        assert!(!service.list().unwrap().contains(&"Freelance".to_string()));

        let err = service.remove("Freelance").unwrap_err();
        assert!(err.is_not_found());
    }
}
