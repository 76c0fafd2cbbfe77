//! Budget vs. actual report
//!
//! Compares budgeted amounts against what was actually spent in one calendar
//! month, plus the allocation summary of the budget against monthly income.

use crate::models::palette::OTHER_CATEGORY_COLOR;
use crate::models::{BudgetCategory, Money, Transaction};

/// One category row of the budget vs. actual table
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub name: String,
    pub budgeted: Money,
    pub actual: Money,
    /// budgeted minus actual; negative means overspent
    pub variance: Money,
    pub color: String,
}

/// Budget vs. actual for one month
#[derive(Debug, Clone)]
pub struct BudgetStatusReport {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<BudgetRow>,
    pub total_budgeted: Money,
    pub total_actual: Money,
    pub total_variance: Money,
}

impl BudgetStatusReport {
    /// Generate the report for the given month
    ///
    /// Rows cover the union of budget category names and category names seen
    /// in that month's expenses: budgeted-but-unspent rows show actual 0, and
    /// unbudgeted spending shows budgeted 0 with a neutral color. Rows are
    /// sorted by budgeted amount, largest first.
    pub fn generate(
        transactions: &[Transaction],
        budget: &[BudgetCategory],
        year: i32,
        month: u32,
    ) -> Self {
        let month_expenses: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.is_expense() && t.month_key() == Some((year, month)))
            .collect();

        let actual_for = |name: &str| -> Money {
            month_expenses
                .iter()
                .filter(|t| t.category == name)
                .map(|t| t.amount)
                .sum()
        };

        let mut rows: Vec<BudgetRow> = budget
            .iter()
            .map(|cat| {
                let actual = actual_for(&cat.name);
                BudgetRow {
                    name: cat.name.clone(),
                    budgeted: cat.amount,
                    actual,
                    variance: cat.amount - actual,
                    color: cat.color.clone(),
                }
            })
            .collect();

        // Spending in categories the budget does not know about
        for txn in &month_expenses {
            if rows.iter().any(|r| r.name == txn.category) {
                continue;
            }
            let actual = actual_for(&txn.category);
            rows.push(BudgetRow {
                name: txn.category.clone(),
                budgeted: Money::zero(),
                actual,
                variance: -actual,
                color: OTHER_CATEGORY_COLOR.to_string(),
            });
        }

        rows.sort_by(|a, b| b.budgeted.cmp(&a.budgeted));

        let total_budgeted: Money = rows.iter().map(|r| r.budgeted).sum();
        let total_actual: Money = rows.iter().map(|r| r.actual).sum();

        Self {
            year,
            month,
            rows,
            total_budgeted,
            total_actual,
            total_variance: total_budgeted - total_actual,
        }
    }

    /// Render as an aligned per-category table
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget vs. actual: {}-{:02}\n", self.year, self.month));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>12} {:>12} {:>12}\n",
            "Category", "Budgeted", "Actual", "Variance"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<25} {:>12} {:>12} {:>12}\n",
                row.name,
                row.budgeted.format_with_symbol(symbol),
                row.actual.format_with_symbol(symbol),
                row.variance.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>12} {:>12} {:>12}\n",
            "Total",
            self.total_budgeted.format_with_symbol(symbol),
            self.total_actual.format_with_symbol(symbol),
            self.total_variance.format_with_symbol(symbol)
        ));

        output
    }
}

/// How the budget allocates monthly income
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationSummary {
    pub monthly_income: Money,
    pub total_budgeted: Money,
    /// Income not yet allocated to any category; negative when overallocated
    pub remaining: Money,
}

/// Sum budget allocations against the monthly income figure
pub fn allocation_summary(budget: &[BudgetCategory], monthly_income: Money) -> AllocationSummary {
    let total_budgeted: Money = budget.iter().map(|c| c.amount).sum();
    AllocationSummary {
        monthly_income,
        total_budgeted,
        remaining: monthly_income - total_budgeted,
    }
}

/// One amount's share of a total as a percentage, one decimal, 0 when the
/// total is not positive
pub fn allocation_share(amount: Money, total: Money) -> f64 {
    if total.cents() <= 0 {
        return 0.0;
    }
    let share = amount.cents() as f64 / total.cents() as f64 * 100.0;
    (share * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn expense(category: &str, cents: i64, date: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "test",
            Money::from_cents(cents),
            category,
            date,
        )
    }

    #[test]
    fn test_overspent_category() {
        let budget = vec![BudgetCategory::new("Food", Money::from_cents(2000), "#f97316")];
        let transactions = vec![expense("Food", 2500, "2024-01-15")];

        let report = BudgetStatusReport::generate(&transactions, &budget, 2024, 1);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].budgeted, Money::from_cents(2000));
        assert_eq!(report.rows[0].actual, Money::from_cents(2500));
        assert_eq!(report.rows[0].variance, Money::from_cents(-500));
        assert_eq!(report.total_variance, Money::from_cents(-500));
    }

    #[test]
    fn test_union_includes_unspent_and_unbudgeted() {
        let budget = vec![
            BudgetCategory::new("Food", Money::from_cents(2000), "#f97316"),
            BudgetCategory::new("Rent", Money::from_cents(8000), "#ef4444"),
        ];
        let transactions = vec![
            expense("Food", 500, "2024-01-10"),
            expense("Parking", 300, "2024-01-12"),
        ];

        let report = BudgetStatusReport::generate(&transactions, &budget, 2024, 1);
        assert_eq!(report.rows.len(), 3);

        let parking = report.rows.iter().find(|r| r.name == "Parking").unwrap();
        assert!(parking.budgeted.is_zero());
        assert_eq!(parking.actual, Money::from_cents(300));
        assert_eq!(parking.color, "#6b7280");

        let rent = report.rows.iter().find(|r| r.name == "Rent").unwrap();
        assert!(rent.actual.is_zero());
        assert_eq!(rent.variance, Money::from_cents(8000));
    }

    #[test]
    fn test_rows_sorted_by_budgeted_desc() {
        let budget = vec![
            BudgetCategory::new("Food", Money::from_cents(2000), "#f97316"),
            BudgetCategory::new("Rent", Money::from_cents(8000), "#ef4444"),
        ];
        let report = BudgetStatusReport::generate(&[], &budget, 2024, 1);

        let names: Vec<_> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food"]);
    }

    #[test]
    fn test_only_requested_month_counts() {
        let budget = vec![BudgetCategory::new("Food", Money::from_cents(2000), "#f97316")];
        let transactions = vec![
            expense("Food", 500, "2024-01-10"),
            expense("Food", 900, "2024-02-10"),
            expense("Food", 100, "not a date"),
        ];

        let report = BudgetStatusReport::generate(&transactions, &budget, 2024, 1);
        assert_eq!(report.rows[0].actual, Money::from_cents(500));
    }

    #[test]
    fn test_totals_row() {
        let budget = vec![
            BudgetCategory::new("Food", Money::from_cents(2000), "#f97316"),
            BudgetCategory::new("Rent", Money::from_cents(8000), "#ef4444"),
        ];
        let transactions = vec![
            expense("Food", 1500, "2024-01-10"),
            expense("Rent", 8000, "2024-01-01"),
        ];

        let report = BudgetStatusReport::generate(&transactions, &budget, 2024, 1);
        assert_eq!(report.total_budgeted, Money::from_cents(10000));
        assert_eq!(report.total_actual, Money::from_cents(9500));
        assert_eq!(report.total_variance, Money::from_cents(500));
    }

    #[test]
    fn test_allocation_summary() {
        let budget = vec![
            BudgetCategory::new("Food", Money::from_cents(2000), "#f97316"),
            BudgetCategory::new("Rent", Money::from_cents(8000), "#ef4444"),
        ];
        let summary = allocation_summary(&budget, Money::from_cents(15000));

        assert_eq!(summary.total_budgeted, Money::from_cents(10000));
        assert_eq!(summary.remaining, Money::from_cents(5000));
    }

    #[test]
    fn test_allocation_share() {
        assert_eq!(
            allocation_share(Money::from_cents(2500), Money::from_cents(10000)),
            25.0
        );
        assert_eq!(
            allocation_share(Money::from_cents(333), Money::from_cents(10000)),
            3.3
        );
        assert_eq!(allocation_share(Money::from_cents(2500), Money::zero()), 0.0);
    }
}
