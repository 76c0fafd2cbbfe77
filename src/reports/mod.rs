//! Reports module for PocketPlan
//!
//! Aggregations over the stored data: dashboard totals and breakdowns,
//! budget vs. actual, goal progress, and deadline classification. Report
//! generators take plain slices so they stay free of storage concerns.

pub mod budget_status;
pub mod dashboard;
pub mod deadline;
pub mod goals;

pub use budget_status::{allocation_share, allocation_summary, AllocationSummary, BudgetRow, BudgetStatusReport};
pub use dashboard::{CategorySlice, DashboardReport, MonthlyFlow, Totals};
pub use deadline::{classify_deadline, parse_deadline_date, DeadlineStatus};
pub use goals::{SavingsReport, SavingsRow, SpendingGoalRow, SpendingGoalsReport};
