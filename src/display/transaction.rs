//! Render transactions for the terminal
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::Transaction;

/// One register row: date, description, category, signed amount
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let amount = if txn.is_expense() {
        format!("-{}", txn.amount.format_with_symbol(symbol))
    } else {
        format!("+{}", txn.amount.format_with_symbol(symbol))
    };

    format!(
        "{:10} {:7} {:24} {:14} {:>12}",
        truncate(&txn.date, 10),
        txn.kind.to_string(),
        truncate(&txn.description, 24),
        truncate(&txn.category, 14),
        amount
    )
}

/// A register of many transactions
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:24} {:14} {:>12}\n",
        "Date", "Type", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Full detail block for `txn show`
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Date:        {}\n", txn.date));

    if !txn.tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", txn.tags.join(", ")));
    }

    output
}

/// Clip to `max_len` characters, padding shorter values to the same width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
