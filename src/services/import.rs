//! Transaction batch import
//!
//! Parses the row-per-transaction CSV format (`id,type,description,amount,
//! category,date`) and applies the surviving rows to storage. Columns are
//! matched by name, so order and extra columns do not matter; `id` values in
//! the file are ignored and every imported transaction gets a fresh id.
//!
//! Structural problems (missing header column) fail the whole file. Bad rows
//! (unknown type, unparseable amount) are skipped with a warning and the rest
//! of the file still imports.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{PlanError, PlanResult};
use crate::models::{Money, Transaction, TransactionKind, OTHER_CATEGORY_NAME};
use crate::services::TransactionService;
use crate::storage::Storage;

/// One decoded batch row, not yet assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: String,
}

/// Outcome of decoding a batch file
#[derive(Debug, Clone)]
pub struct ParsedBatch {
    /// Rows that passed per-row validation, in file order
    pub rows: Vec<ParsedRow>,
    /// Number of rows dropped by per-row validation
    pub skipped: usize,
    /// One message per dropped row
    pub warnings: Vec<String>,
}

/// Outcome of a completed import
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Number of transactions added to storage
    pub imported: usize,
    /// Number of rows dropped by per-row validation
    pub skipped: usize,
    /// One message per dropped row
    pub warnings: Vec<String>,
}

impl ImportResult {
    /// Short human-readable summary line
    pub fn describe(&self) -> String {
        if self.skipped == 0 {
            format!("Imported {} transaction(s)", self.imported)
        } else {
            format!(
                "Imported {} transaction(s), skipped {} invalid row(s)",
                self.imported, self.skipped
            )
        }
    }
}

/// Positions of the batch columns within the header row
struct ColumnIndex {
    kind: usize,
    description: usize,
    amount: usize,
    category: usize,
    date: usize,
}

impl ColumnIndex {
    /// Resolve required columns by name, case-insensitively
    fn from_headers(headers: &StringRecord) -> PlanResult<Self> {
        let require = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    PlanError::Format(format!("Batch file is missing the '{}' column", name))
                })
        };

        Ok(Self {
            kind: require("type")?,
            description: require("description")?,
            amount: require("amount")?,
            category: require("category")?,
            date: require("date")?,
        })
    }
}

/// Decode a transaction batch file.
///
/// `known_expense` and `known_income` supply the canonical category names for
/// each transaction type; raw values are matched against them
/// case-insensitively and replaced with the canonical spelling on a hit.
/// Unmatched values are kept as typed, and an empty category falls back to
/// the "Other" bucket. Rows with a missing date get `today`.
pub fn parse_transaction_batch(
    content: &str,
    known_expense: &[String],
    known_income: &[String],
    today: NaiveDate,
) -> PlanResult<ParsedBatch> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| PlanError::Format(format!("Could not read batch header: {}", e)))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    // Lowercased name -> canonical spelling, built once for the whole file
    let expense_lookup = canonical_lookup(known_expense);
    let income_lookup = canonical_lookup(known_income);

    let default_date = today.format("%Y-%m-%d").to_string();

    let mut batch = ParsedBatch {
        rows: Vec::new(),
        skipped: 0,
        warnings: Vec::new(),
    };

    for (idx, result) in reader.records().enumerate() {
        let row_number = idx + 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                skip_row(&mut batch, row_number, format!("unreadable row: {}", e));
                continue;
            }
        };

        let kind_raw = field(&record, columns.kind);
        let kind = match TransactionKind::from_str(kind_raw) {
            Ok(kind) => kind,
            Err(_) => {
                skip_row(
                    &mut batch,
                    row_number,
                    format!("unknown transaction type '{}'", kind_raw),
                );
                continue;
            }
        };

        let amount_raw = field(&record, columns.amount);
        let amount = match Money::parse(amount_raw) {
            Ok(amount) => amount,
            Err(_) => {
                skip_row(
                    &mut batch,
                    row_number,
                    format!("unparseable amount '{}'", amount_raw),
                );
                continue;
            }
        };

        let lookup = match kind {
            TransactionKind::Expense => &expense_lookup,
            TransactionKind::Income => &income_lookup,
        };
        let category_raw = field(&record, columns.category);
        let category = if category_raw.is_empty() {
            OTHER_CATEGORY_NAME.to_string()
        } else {
            lookup
                .get(category_raw.to_lowercase().as_str())
                .cloned()
                .unwrap_or_else(|| category_raw.to_string())
        };

        let date_raw = field(&record, columns.date);
        let date = if date_raw.is_empty() {
            default_date.clone()
        } else {
            date_raw.to_string()
        };

        batch.rows.push(ParsedRow {
            kind,
            description: field(&record, columns.description).to_string(),
            amount,
            category,
            date,
        });
    }

    Ok(batch)
}

/// Build the lowercased-name lookup table for one category set
fn canonical_lookup(known: &[String]) -> HashMap<String, String> {
    known
        .iter()
        .map(|name| (name.to_lowercase(), name.clone()))
        .collect()
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn skip_row(batch: &mut ParsedBatch, row_number: usize, reason: String) {
    tracing::warn!("Skipping batch row {}: {}", row_number, reason);
    batch.warnings.push(format!("Row {}: {}", row_number, reason));
    batch.skipped += 1;
}

/// Service for applying transaction batch files to storage
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Decode batch content against the stored category lists and add the
    /// surviving rows as new transactions, newest batch first
    pub fn import_from_str(&self, content: &str, today: NaiveDate) -> PlanResult<ImportResult> {
        let known_expense: Vec<String> = self
            .storage
            .budget
            .get_categories()?
            .into_iter()
            .map(|c| c.name)
            .collect();
        let known_income = self.storage.income_categories.get_all()?;

        let batch = parse_transaction_batch(content, &known_expense, &known_income, today)?;

        let transactions: Vec<Transaction> = batch
            .rows
            .into_iter()
            .map(|row| {
                Transaction::new(row.kind, row.description, row.amount, row.category, row.date)
            })
            .collect();

        let imported = TransactionService::new(self.storage).add_imported(transactions)?;

        Ok(ImportResult {
            imported,
            skipped: batch.skipped,
            warnings: batch.warnings,
        })
    }

    /// Read a batch file from disk and import it
    pub fn import_from_path(&self, path: &Path, today: NaiveDate) -> PlanResult<ImportResult> {
        let content = std::fs::read_to_string(path)?;
        self.import_from_str(&content, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlanPaths;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn expense_names() -> Vec<String> {
        vec!["Food".to_string(), "Groceries".to_string()]
    }

    fn income_names() -> Vec<String> {
        vec!["Salary".to_string(), "Freelance".to_string()]
    }

    #[test]
    fn test_parses_quoted_fields() {
        let content = "type,description,amount,category,date\n\
                       Expense,\"Lunch, \"\"quick\"\"\",12.5,Food,2024-01-05\n";

        let batch =
            parse_transaction_batch(content, &expense_names(), &income_names(), today()).unwrap();

        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.skipped, 0);

        let row = &batch.rows[0];
        assert_eq!(row.kind, TransactionKind::Expense);
        assert_eq!(row.description, "Lunch, \"quick\"");
        assert_eq!(row.amount, Money::from_cents(1250));
        assert_eq!(row.category, "Food");
        assert_eq!(row.date, "2024-01-05");
    }

    #[test]
    fn test_columns_matched_by_name_not_position() {
        let content = "date,AMOUNT,Category,Type,Description,extra\n\
                       2024-02-01,7,food,Expense,Coffee,ignored\n";

        let batch =
            parse_transaction_batch(content, &expense_names(), &income_names(), today()).unwrap();

        assert_eq!(batch.rows.len(), 1);
        let row = &batch.rows[0];
        assert_eq!(row.description, "Coffee");
        assert_eq!(row.amount, Money::from_cents(700));
        assert_eq!(row.category, "Food");
        assert_eq!(row.date, "2024-02-01");
    }

    #[test]
    fn test_missing_column_fails_naming_it() {
        let content = "type,description,amount,category\n\
                       Expense,Lunch,12.5,Food\n";

        let err = parse_transaction_batch(content, &expense_names(), &income_names(), today())
            .unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("'date'"));
    }

    #[test]
    fn test_unknown_type_skips_row() {
        let content = "type,description,amount,category,date\n\
                       Expense,Lunch,12.5,Food,2024-01-05\n\
                       Transfer,Move to savings,50,Food,2024-01-06\n\
                       Income,Paycheck,100,Salary,2024-01-07\n";

        let batch =
            parse_transaction_batch(content, &expense_names(), &income_names(), today()).unwrap();

        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.warnings.len(), 1);
        assert!(batch.warnings[0].contains("Transfer"));
        assert_eq!(batch.rows[0].description, "Lunch");
        assert_eq!(batch.rows[1].description, "Paycheck");
    }

    #[test]
    fn test_bad_amount_skips_row() {
        let content = "type,description,amount,category,date\n\
                       Expense,Lunch,abc,Food,2024-01-05\n\
                       Expense,Dinner,20,Food,2024-01-05\n";

        let batch =
            parse_transaction_batch(content, &expense_names(), &income_names(), today()).unwrap();

        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.skipped, 1);
        assert!(batch.warnings[0].contains("abc"));
    }

    #[test]
    fn test_category_canonicalized_per_type() {
        let content = "type,description,amount,category,date\n\
                       Expense,Weekly shop,30,groceries,2024-01-05\n\
                       Income,Gig,40,FREELANCE,2024-01-05\n\
                       Expense,Gadget,15,Gadgets,2024-01-05\n\
                       Expense,Misc,5,,2024-01-05\n";

        let batch =
            parse_transaction_batch(content, &expense_names(), &income_names(), today()).unwrap();

        assert_eq!(batch.rows[0].category, "Groceries");
        assert_eq!(batch.rows[1].category, "Freelance");
        assert_eq!(batch.rows[2].category, "Gadgets");
        assert_eq!(batch.rows[3].category, "Other");
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let content = "type,description,amount,category,date\n\
                       Expense,Lunch,12.5,Food,\n";

        let batch =
            parse_transaction_batch(content, &expense_names(), &income_names(), today()).unwrap();
        assert_eq!(batch.rows[0].date, "2024-01-10");
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_import_applies_rows_with_fresh_ids() {
        let (_temp, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let content = "id,type,description,amount,category,date\n\
                       old-1,Income,Paycheck,100,salary,2024-01-02\n\
                       old-2,Transfer,Nope,5,Food,2024-01-03\n\
                       old-3,Expense,Lunch,12.5,Food,2024-01-05\n";

        let result = service.import_from_str(content, today()).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.skipped, 1);
        assert!(result.describe().contains("Imported 2"));

        let all = storage.transactions.get_all().unwrap();
        assert_eq!(all.len(), 2);
        // Batch order survives at the front of the list
        assert_eq!(all[0].description, "Paycheck");
        assert_eq!(all[1].description, "Lunch");
        // File ids are discarded
        assert!(all.iter().all(|t| t.id.as_str() != "old-1"));
        // "salary" canonicalized against the seeded income list
        assert_eq!(all[0].category, "Salary");
    }
}
