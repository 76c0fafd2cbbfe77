//! Recording and querying transactions
//!
//! Business logic for recording and managing transactions: validation on
//! create and update, filtered listing, and batch insertion for imports.

use chrono::NaiveDate;

use crate::error::{PlanError, PlanResult};
use crate::models::{
    Money, Transaction, TransactionId, TransactionKind, OTHER_CATEGORY_NAME,
};
use crate::storage::Storage;

/// Create, edit, list, and remove transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Sort order for transaction listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionSort {
    /// By date, most recent first; rows with unreadable dates sort last
    Date,
    /// By amount, largest first
    Amount,
}

/// Predicate set applied by `list`
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind (income or expense)
    pub kind: Option<TransactionKind>,
    /// Filter by category name (case-insensitive)
    pub category: Option<String>,
    /// Filter by calendar month (year, month)
    pub month: Option<(i32, u32)>,
    /// Sort order; `None` keeps stored order (newest first)
    pub sort: Option<TransactionSort>,
    /// Cap on returned rows
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Keep only rows in this category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by calendar month
    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }

    /// Sort results
    pub fn sort(mut self, sort: TransactionSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Keep at most `limit` rows
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Field bundle for a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Money,
    pub category: String,
    /// ISO-8601 date string
    pub date: String,
    pub tags: Vec<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction at the head of the list
    pub fn create(&self, input: CreateTransactionInput) -> PlanResult<Transaction> {
        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(PlanError::Validation(
                "Transaction description cannot be empty".into(),
            ));
        }

        let category = normalize_category(&input.category);

        let txn = Transaction::new(input.kind, description, input.amount, category, input.date)
            .with_tags(input.tags);

        self.storage.transactions.prepend(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Fetch one transaction
    pub fn get(&self, id: &TransactionId) -> PlanResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions with optional filtering, newest first
    pub fn list(&self, filter: TransactionFilter) -> PlanResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(category) = &filter.category {
            transactions.retain(|t| t.category.eq_ignore_ascii_case(category));
        }
        if let Some(key) = filter.month {
            transactions.retain(|t| t.month_key() == Some(key));
        }
        match filter.sort {
            Some(TransactionSort::Date) => {
                transactions
                    .sort_by_key(|t| std::cmp::Reverse(t.parsed_date().unwrap_or(NaiveDate::MIN)));
            }
            Some(TransactionSort::Amount) => {
                transactions.sort_by(|a, b| b.amount.cmp(&a.amount));
            }
            None => {}
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update fields of an existing transaction, keeping its list position
    pub fn update(
        &self,
        id: &TransactionId,
        description: Option<String>,
        amount: Option<Money>,
        category: Option<String>,
        date: Option<String>,
    ) -> PlanResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| PlanError::transaction_not_found(id.to_string()))?;

        if let Some(new_description) = description {
            let new_description = new_description.trim().to_string();
            if new_description.is_empty() {
                return Err(PlanError::Validation(
                    "Transaction description cannot be empty".into(),
                ));
            }
            txn.description = new_description;
        }

        if let Some(new_amount) = amount {
            txn.amount = new_amount;
        }

        if let Some(new_category) = category {
            txn.category = normalize_category(&new_category);
        }

        if let Some(new_date) = date {
            txn.date = new_date;
        }

        self.storage.transactions.update(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Remove a transaction and persist the change
    pub fn delete(&self, id: &TransactionId) -> PlanResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| PlanError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Insert an already-built batch at the head of the list, preserving the
    /// batch's own order
    pub fn add_imported(&self, batch: Vec<Transaction>) -> PlanResult<usize> {
        let count = batch.len();
        self.storage.transactions.prepend_batch(batch)?;
        self.storage.transactions.save()?;
        Ok(count)
    }
}

/// Trim a category name, falling back to the "Other" bucket when empty
fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        OTHER_CATEGORY_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
