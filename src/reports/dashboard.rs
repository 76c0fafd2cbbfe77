//! Dashboard report
//!
//! Overall totals, per-category breakdowns and the month-by-month cash flow
//! series. All aggregation here is pure: it takes the transaction and budget
//! slices as plain inputs and never touches storage.

use crate::models::palette::UNBUDGETED_COLOR;
use crate::models::{color_for_name, BudgetCategory, Money, Transaction};

/// Income, expense and net totals across a transaction set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

/// One slice of a category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: Money,
    pub color: String,
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    /// Short label such as "Jan '24"
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

/// Sum income and expenses over all transactions, regardless of date
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut income = Money::zero();
    let mut expenses = Money::zero();

    for txn in transactions {
        if txn.is_income() {
            income += txn.amount;
        } else {
            expenses += txn.amount;
        }
    }

    Totals {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Group expense transactions by category name, in first-seen order
///
/// Each slice takes its color from the budget category with the same name;
/// spending in a category with no budget entry still shows up, with a fixed
/// fallback color.
pub fn expense_breakdown(
    transactions: &[Transaction],
    budget: &[BudgetCategory],
) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match slices.iter_mut().find(|s| s.name == txn.category) {
            Some(slice) => slice.amount += txn.amount,
            None => {
                let color = budget
                    .iter()
                    .find(|c| c.name == txn.category)
                    .map(|c| c.color.clone())
                    .unwrap_or_else(|| UNBUDGETED_COLOR.to_string());
                slices.push(CategorySlice {
                    name: txn.category.clone(),
                    amount: txn.amount,
                    color,
                });
            }
        }
    }

    slices
}

/// Group income transactions by category name, in first-seen order
///
/// Colors come from the shared palette, derived from the category name so a
/// category keeps its color as the list grows.
pub fn income_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_income()) {
        match slices.iter_mut().find(|s| s.name == txn.category) {
            Some(slice) => slice.amount += txn.amount,
            None => slices.push(CategorySlice {
                name: txn.category.clone(),
                amount: txn.amount,
                color: color_for_name(&txn.category).to_string(),
            }),
        }
    }

    slices
}

/// Bucket transactions into calendar months, oldest first
///
/// Transactions whose dates do not parse are left out of the series; they
/// still count toward the overall totals.
pub fn monthly_flows(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
    let mut flows: Vec<MonthlyFlow> = Vec::new();

    for txn in transactions {
        let Some((year, month)) = txn.month_key() else {
            continue;
        };

        let idx = match flows.iter().position(|f| f.year == year && f.month == month) {
            Some(idx) => idx,
            None => {
                flows.push(MonthlyFlow {
                    year,
                    month,
                    label: month_label(year, month),
                    income: Money::zero(),
                    expenses: Money::zero(),
                });
                flows.len() - 1
            }
        };

        if txn.is_income() {
            flows[idx].income += txn.amount;
        } else {
            flows[idx].expenses += txn.amount;
        }
    }

    flows.sort_by_key(|f| (f.year, f.month));
    flows
}

/// Short "Jan '24" style label for a month
fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let name = NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???");
    format!("{} '{:02}", name, year.rem_euclid(100))
}

/// The assembled dashboard view
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub totals: Totals,
    pub expense_slices: Vec<CategorySlice>,
    pub income_slices: Vec<CategorySlice>,
    pub monthly: Vec<MonthlyFlow>,
    pub transaction_count: usize,
}

impl DashboardReport {
    /// Generate the dashboard from the current transactions and budget
    pub fn generate(transactions: &[Transaction], budget: &[BudgetCategory]) -> Self {
        Self {
            totals: compute_totals(transactions),
            expense_slices: expense_breakdown(transactions, budget),
            income_slices: income_breakdown(transactions),
            monthly: monthly_flows(transactions),
            transaction_count: transactions.len(),
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Income:   {}\n",
            self.totals.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Expenses: {}\n",
            self.totals.expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net:      {}\n",
            self.totals.net.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Transactions: {}\n", self.transaction_count));

        if !self.expense_slices.is_empty() {
            output.push_str("\nExpenses by category\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            let total = self.totals.expenses;
            for slice in &self.expense_slices {
                let share = if total.is_zero() {
                    0.0
                } else {
                    slice.amount.cents() as f64 / total.cents() as f64 * 100.0
                };
                output.push_str(&format!(
                    "{:<25} {:>12} {:>6.1}%\n",
                    slice.name,
                    slice.amount.format_with_symbol(symbol),
                    share
                ));
            }
        }

        if !self.income_slices.is_empty() {
            output.push_str("\nIncome by category\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for slice in &self.income_slices {
                output.push_str(&format!(
                    "{:<25} {:>12}\n",
                    slice.name,
                    slice.amount.format_with_symbol(symbol)
                ));
            }
        }

        if !self.monthly.is_empty() {
            output.push_str("\nMonthly flow\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12}\n",
                "Month", "Income", "Expenses", "Net"
            ));
            for flow in &self.monthly {
                output.push_str(&format!(
                    "{:<10} {:>12} {:>12} {:>12}\n",
                    flow.label,
                    flow.income.format_with_symbol(symbol),
                    flow.expenses.format_with_symbol(symbol),
                    (flow.income - flow.expenses).format_with_symbol(symbol)
                ));
            }
        }

        output
    }
}
