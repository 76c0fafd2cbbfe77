//! Transaction batch export as CSV
//!
//! Exports the transaction list in the row-per-record batch format that
//! [`crate::services::import`] reads back: header `id,type,description,
//! amount,category,date`, text fields escaped, amounts written as plain
//! numbers.

use std::io::Write;

use crate::backup::codec::{escape_csv, number_field};
use crate::error::{PlanError, PlanResult};
use crate::models::Transaction;

/// Header row of the transaction batch format
pub const BATCH_HEADER: &str = "id,type,description,amount,category,date";

/// Export transactions to batch CSV, in list order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> PlanResult<()> {
    writeln!(writer, "{}", BATCH_HEADER).map_err(|e| PlanError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape_csv(txn.id.as_str()),
            txn.kind,
            escape_csv(&txn.description),
            number_field(txn.amount),
            escape_csv(&txn.category),
            escape_csv(&txn.date)
        )
        .map_err(|e| PlanError::Export(e.to_string()))?;
    }

    Ok(())
}
