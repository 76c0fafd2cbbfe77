//! Income and expense records
//!
//! Represents income and expense entries. Dates are kept as the ISO-8601
//! strings they were entered with; time-bucketed views parse them on demand
//! and drop entries whose dates do not parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    /// Exact match only; batch import relies on this to reject rows with
    /// any other type value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// Error returned when a transaction type string is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction type: {}", self.0)
    }
}

impl std::error::Error for ParseKindError {}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable id, kept across edits and backups
    pub id: TransactionId,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Free-text description
    pub description: String,

    /// Amount in currency units (expected non-negative, not enforced)
    pub amount: Money,

    /// Category name, matched against budget categories by name
    pub category: String,

    /// ISO-8601 date string as entered
    pub date: String,

    /// Optional tags, order preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            kind,
            description: description.into(),
            amount,
            category: category.into(),
            date: date.into(),
            tags: Vec::new(),
        }
    }

    /// Attach tags, replacing any existing ones
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Parse the stored date string
    ///
    /// Accepts plain `YYYY-MM-DD` or a full RFC 3339 timestamp. Returns None
    /// for anything else; callers decide whether to drop or keep the entry.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// Year and month of the transaction date, if the date parses
    pub fn month_key(&self) -> Option<(i32, u32)> {
        use chrono::Datelike;
        self.parsed_date().map(|d| (d.year(), d.month()))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description, self.amount)
    }
}

/// Parse an ISO-8601 date string into a calendar date
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "Groceries",
            Money::from_cents(4550),
            "Food",
            "2024-01-05",
        )
    }

    #[test]
    fn test_new_transaction() {
        let txn = sample_expense();
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.date, "2024-01-05");
        assert!(txn.tags.is_empty());
    }

    #[test]
    fn test_kind_from_str_is_exact() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("Expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("income".parse::<TransactionKind>().is_err());
        assert!("Transfer".parse::<TransactionKind>().is_err());
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_parsed_date() {
        let txn = sample_expense();
        assert_eq!(
            txn.parsed_date(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );

        let mut bad = sample_expense();
        bad.date = "not-a-date".to_string();
        assert_eq!(bad.parsed_date(), None);

        let mut stamped = sample_expense();
        stamped.date = "2024-01-05T14:30:00+00:00".to_string();
        assert_eq!(
            stamped.parsed_date(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
    }

    #[test]
    fn test_month_key() {
        let txn = sample_expense();
        assert_eq!(txn.month_key(), Some((2024, 1)));
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let txn = sample_expense();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"Expense\""));
        assert!(!json.contains("\"kind\""));
        // Empty tags are omitted entirely
        assert!(!json.contains("\"tags\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_deserialization_defaults_missing_tags() {
        let json = r#"{"id":"txn-1","type":"Income","description":"Pay","amount":100,"category":"Salary","date":"2024-01-01"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.tags.is_empty());
        assert_eq!(txn.amount, Money::from_cents(10000));
    }

    #[test]
    fn test_tags_round_trip() {
        let txn = sample_expense().with_tags(vec!["lunch".to_string(), "work".to_string()]);
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tags, vec!["lunch", "work"]);
    }

    #[test]
    fn test_display() {
        let txn = sample_expense();
        assert_eq!(format!("{}", txn), "2024-01-05 Groceries 45.50");
    }
}
