//! `txn` subcommands
//!
//! Implements CLI commands for recording, listing, editing, and batch
//! importing/exporting transactions.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{PlanError, PlanResult};
use crate::export::export_transactions_csv;
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::services::{
    CreateTransactionInput, ImportService, TransactionFilter, TransactionService, TransactionSort,
};
use crate::storage::Storage;

/// Record, list, edit, and move transactions
#[derive(Subcommand)]
pub enum TxnCommands {
    /// Record a transaction
    Add {
        /// Transaction type (income or expense)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// What the money was for
        description: String,
        /// Amount (e.g., "12.50" or "1200")
        amount: String,
        /// Category name, defaults to "Other"
        #[arg(short, long)]
        category: Option<String>,
        /// Date as YYYY-MM-DD; today when omitted
        #[arg(short, long)]
        date: Option<String>,
        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Only rows in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by calendar month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Sort order (date or amount)
        #[arg(short, long)]
        sort: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one transaction in full
    Show {
        /// Id of the transaction to show
        id: String,
    },
    /// Change fields on an existing transaction
    Edit {
        /// Id of the transaction to edit
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Replacement amount
        #[arg(short, long)]
        amount: Option<String>,
        /// Replacement category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove a transaction
    Rm {
        /// Id of the transaction to remove
        id: String,
        /// Delete without a confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Import transactions from a batch CSV file
    Import {
        /// Path to the batch file
        file: PathBuf,
    },
    /// Export all transactions as a batch CSV file
    Export {
        /// Output file; prints to stdout when omitted
        file: Option<PathBuf>,
    },
}

/// Dispatch one `txn` subcommand
pub fn handle_txn_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TxnCommands,
) -> PlanResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        TxnCommands::Add {
            kind,
            description,
            amount,
            category,
            date,
            tags,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => validate_date(&date_str)?,
                None => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            };

            let txn = service.create(CreateTransactionInput {
                kind,
                description,
                amount,
                category: category.unwrap_or_default(),
                date,
                tags,
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Type:     {}", txn.kind);
            println!("  Date:     {}", txn.date);
            println!("  Amount:   {}", txn.amount.format_with_symbol(symbol));
            println!("  Category: {}", txn.category);
        }

        TxnCommands::List {
            kind,
            category,
            month,
            sort,
            limit,
        } => {
            let mut filter = TransactionFilter::new();

            if let Some(kind_str) = kind {
                filter = filter.kind(parse_kind(&kind_str)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(month_str) = month {
                let (year, month) = parse_month(&month_str)?;
                filter = filter.month(year, month);
            }
            if let Some(sort_str) = sort {
                filter = filter.sort(parse_sort(&sort_str)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, symbol));
            println!("\nShowing {} transaction(s)", transactions.len());
        }

        TxnCommands::Show { id } => {
            let txn = find_transaction(&service, &id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TxnCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let txn = find_transaction(&service, &id)?;

            let new_amount = match amount {
                Some(amount_str) => Some(parse_amount(&amount_str)?),
                None => None,
            };
            let new_date = match date {
                Some(date_str) => Some(validate_date(&date_str)?),
                None => None,
            };

            let updated = service.update(&txn.id, description, new_amount, category, new_date)?;

            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", updated.date);
            println!("  Amount:   {}", updated.amount.format_with_symbol(symbol));
            println!("  Category: {}", updated.category);
        }

        TxnCommands::Rm { id, force } => {
            let txn = find_transaction(&service, &id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:        {}", txn.date);
                println!("  Amount:      {}", txn.amount.format_with_symbol(symbol));
                println!("  Description: {}", txn.description);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id, deleted.date, deleted.description
            );
        }

        TxnCommands::Import { file } => {
            let today = chrono::Local::now().date_naive();
            let result = ImportService::new(storage).import_from_path(&file, today)?;

            println!("{}", result.describe());
            for warning in &result.warnings {
                println!("  {}", warning);
            }
        }

        TxnCommands::Export { file } => {
            let transactions = service.list(TransactionFilter::new())?;

            match file {
                Some(path) => {
                    let mut output = std::fs::File::create(&path).map_err(|e| {
                        PlanError::Export(format!("Could not create {}: {}", path.display(), e))
                    })?;
                    export_transactions_csv(&transactions, &mut output)?;
                    output.flush().map_err(|e| PlanError::Export(e.to_string()))?;
                    println!(
                        "Exported {} transaction(s) to {}",
                        transactions.len(),
                        path.display()
                    );
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut lock = stdout.lock();
                    export_transactions_csv(&transactions, &mut lock)?;
                }
            }
        }
    }

    Ok(())
}

/// Locate a transaction by its id string
fn find_transaction(service: &TransactionService, id: &str) -> PlanResult<Transaction> {
    let id = TransactionId::from_raw(id.trim());
    service
        .get(&id)?
        .ok_or_else(|| PlanError::transaction_not_found(id.to_string()))
}

/// Parse a CLI transaction type, accepting any casing
fn parse_kind(s: &str) -> PlanResult<TransactionKind> {
    match s.trim().to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        _ => Err(PlanError::Validation(format!(
            "Invalid transaction type: '{}'. Use income or expense",
            s
        ))),
    }
}

/// Parse a CLI amount argument
fn parse_amount(s: &str) -> PlanResult<Money> {
    Money::parse(s).map_err(|e| {
        PlanError::Validation(format!(
            "Invalid amount '{}'. Use a number like '12.50'. {}",
            s, e
        ))
    })
}

/// Check a CLI date argument is a calendar date, returning it unchanged
fn validate_date(s: &str) -> PlanResult<String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        PlanError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })?;
    Ok(s.trim().to_string())
}

/// Parse a YYYY-MM month argument
fn parse_month(s: &str) -> PlanResult<(i32, u32)> {
    let invalid =
        || PlanError::Validation(format!("Invalid month format: '{}'. Use YYYY-MM", s));

    let (year_str, month_str) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let month: u32 = month_str.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Parse a sort-order argument
fn parse_sort(s: &str) -> PlanResult<TransactionSort> {
    match s.trim().to_lowercase().as_str() {
        "date" => Ok(TransactionSort::Date),
        "amount" => Ok(TransactionSort::Amount),
        _ => Err(PlanError::Validation(format!(
            "Invalid sort order: '{}'. Use date or amount",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_accepts_any_case() {
        assert_eq!(parse_kind("Income").unwrap(), TransactionKind::Income);
        assert_eq!(parse_kind("EXPENSE").unwrap(), TransactionKind::Expense);
        assert!(parse_kind("transfer").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert!(parse_month("2024").is_err());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date(" 2024-01-05 ").unwrap(), "2024-01-05");
        assert!(validate_date("01/05/2024").is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("date").unwrap(), TransactionSort::Date);
        assert_eq!(parse_sort("Amount").unwrap(), TransactionSort::Amount);
        assert!(parse_sort("size").is_err());
    }
}
