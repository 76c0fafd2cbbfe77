//! Service layer for PocketPlan
//!
//! Business logic over the stores: input validation, derived values, and
//! operations that touch more than one entity.

pub mod budget;
pub mod goals;
pub mod import;
pub mod income;
pub mod transaction;

pub use budget::BudgetService;
pub use goals::{CreateSavingsGoalInput, GoalService};
pub use import::{parse_transaction_batch, ImportResult, ImportService, ParsedBatch, ParsedRow};
pub use income::IncomeCategoryService;
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, TransactionSort,
};
