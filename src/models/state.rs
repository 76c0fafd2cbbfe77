//! Complete application state bundle
//!
//! Everything the app persists, gathered into one value. This is what the
//! backup codec encodes and decodes, and what snapshot export serializes.
//! Live data is still owned by the individual stores; this bundle is
//! assembled on demand and applied back atomically on restore.

use serde::{Deserialize, Serialize};

use super::category::BudgetCategory;
use super::money::Money;
use super::preferences::{default_income_categories, AccentColor, Currency, FontSize, Theme};
use super::savings_goal::SavingsGoal;
use super::spending_goal::SpendingGoal;
use super::transaction::Transaction;

/// All persisted state slices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub currency: Currency,
    pub font_size: FontSize,
    pub monthly_income: Money,
    pub budget: Vec<BudgetCategory>,
    pub transactions: Vec<Transaction>,
    pub savings_goals: Vec<SavingsGoal>,
    pub budget_goals: Vec<SpendingGoal>,
    pub income_categories: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accent_color: AccentColor::default(),
            currency: Currency::default(),
            font_size: FontSize::default(),
            monthly_income: Money::zero(),
            budget: vec![BudgetCategory::other()],
            transactions: Vec::new(),
            savings_goals: Vec::new(),
            budget_goals: Vec::new(),
            income_categories: default_income_categories(),
        }
    }
}

impl AppState {
    /// Re-establish the reserved "Other" category if it is missing
    ///
    /// Aggregation assumes the fallback bucket exists, so any state coming
    /// from outside (a restored backup) passes through here.
    pub fn ensure_other_category(&mut self) {
        if !self.budget.iter().any(|c| c.is_other()) {
            self.budget.push(BudgetCategory::other());
        }
    }
}
