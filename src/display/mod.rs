//! Terminal rendering helpers
//!
//! Pure functions that turn models into aligned text blocks. Handlers print
//! the returned strings; nothing here touches stdout directly.

pub mod budget;
pub mod transaction;

pub use budget::format_budget_overview;
pub use transaction::{format_transaction_details, format_transaction_list, format_transaction_row};
