//! Storage layer for PocketPlan
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. One store per state slice, coordinated by [`Storage`].

pub mod budget;
pub mod file_io;
pub mod income;
pub mod savings;
pub mod spending;
pub mod transactions;

pub use budget::BudgetStore;
pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeStore;
pub use savings::SavingsStore;
pub use spending::SpendingStore;
pub use transactions::TransactionStore;

use crate::config::paths::PlanPaths;
use crate::config::settings::Settings;
use crate::error::PlanError;
use crate::models::AppState;

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: PlanPaths,
    pub transactions: TransactionStore,
    pub budget: BudgetStore,
    pub savings_goals: SavingsStore,
    pub spending_goals: SpendingStore,
    pub income_categories: IncomeStore,
}

impl Storage {
    /// Open the stores rooted at `paths`, creating directories as needed
    pub fn new(paths: PlanPaths) -> Result<Self, PlanError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            budget: BudgetStore::new(paths.budget_file()),
            savings_goals: SavingsStore::new(paths.savings_goals_file()),
            spending_goals: SpendingStore::new(paths.spending_goals_file()),
            income_categories: IncomeStore::new(paths.income_categories_file()),
            paths,
        })
    }

    /// The layout this storage was opened with
    pub fn paths(&self) -> &PlanPaths {
        &self.paths
    }

    /// Load every store
    pub fn load_all(&mut self) -> Result<(), PlanError> {
        self.transactions.load()?;
        self.budget.load()?;
        self.savings_goals.load()?;
        self.spending_goals.load()?;
        self.income_categories.load()?;

        tracing::debug!(
            transactions = self.transactions.count()?,
            budget_categories = self.budget.get_categories()?.len(),
            "Loaded state from {}",
            self.paths.data_dir().display()
        );

        Ok(())
    }

    /// Persist every store
    pub fn save_all(&self) -> Result<(), PlanError> {
        self.transactions.save()?;
        self.budget.save()?;
        self.savings_goals.save()?;
        self.spending_goals.save()?;
        self.income_categories.save()?;
        Ok(())
    }

    /// Assemble the complete application state
    pub fn app_state(&self, settings: &Settings) -> Result<AppState, PlanError> {
        Ok(AppState {
            theme: settings.theme,
            accent_color: settings.accent_color,
            currency: settings.currency,
            font_size: settings.font_size,
            monthly_income: self.budget.monthly_income()?,
            budget: self.budget.get_categories()?,
            transactions: self.transactions.get_all()?,
            savings_goals: self.savings_goals.get_all()?,
            budget_goals: self.spending_goals.get_all()?,
            income_categories: self.income_categories.get_all()?,
        })
    }

    /// Apply the data slices of a state bundle to the in-memory stores
    ///
    /// Preference fields (theme, currency, ...) belong to [`Settings`] and are
    /// applied by the caller. Nothing touches disk until `save_all`.
    pub fn apply_state(&self, state: &AppState) -> Result<(), PlanError> {
        self.budget
            .replace_all(state.monthly_income, state.budget.clone())?;
        self.transactions.replace_all(state.transactions.clone())?;
        self.savings_goals.replace_all(state.savings_goals.clone())?;
        self.spending_goals.replace_all(state.budget_goals.clone())?;
        self.income_categories
            .replace_all(state.income_categories.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let _storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
    }

    #[test]
    fn test_app_state_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        storage
            .transactions
            .prepend(Transaction::new(
                TransactionKind::Income,
                "Paycheck",
                Money::from_cents(250000),
                "Salary",
                "2024-01-01",
            ))
            .unwrap();
        storage.budget.set_monthly_income(Money::from_cents(300000)).unwrap();

        let state = storage.app_state(&settings).unwrap();
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.monthly_income, Money::from_cents(300000));

        // Applying the same state back is a no-op for content
        storage.apply_state(&state).unwrap();
        let again = storage.app_state(&settings).unwrap();
        assert_eq!(state, again);
    }
}
