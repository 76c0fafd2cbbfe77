//! Budget display formatting
//!
//! Formats the monthly budget allocation for terminal output.

use crate::models::BudgetCategory;
use crate::reports::{allocation_share, AllocationSummary};

/// Format the budget allocation overview: the income figure, how much of it
/// is budgeted, and each category's share of the total budget
pub fn format_budget_overview(
    categories: &[BudgetCategory],
    summary: &AllocationSummary,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str("Monthly budget\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Income:    {}\n",
        summary.monthly_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Budgeted:  {}\n",
        summary.total_budgeted.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));
    output.push('\n');

    if categories.is_empty() {
        output.push_str("No budget categories.\n");
        return output;
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>6}  {}\n",
        "Category",
        "Budgeted",
        "Share",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->6}  {:-<14}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        let share = allocation_share(category.amount, summary.total_budgeted);
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>5.1}%  {}\n",
            category.name,
            category.amount.format_with_symbol(symbol),
            share,
            category.id,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::allocation_summary;

    #[test]
    fn test_format_empty_budget() {
        let summary = allocation_summary(&[], Money::zero());
        let output = format_budget_overview(&[], &summary, "$");
        assert!(output.contains("No budget categories"));
        assert!(output.contains("Income:    $0.00"));
    }

    #[test]
    fn test_format_budget_overview() {
        let categories = vec![
            BudgetCategory::new("Food", Money::from_cents(30000), "#f97316"),
            BudgetCategory::new("Rent", Money::from_cents(90000), "#ef4444"),
        ];
        let summary = allocation_summary(&categories, Money::from_cents(300000));

        let output = format_budget_overview(&categories, &summary, "$");
        assert!(output.contains("Income:    $3000.00"));
        assert!(output.contains("Budgeted:  $1200.00"));
        assert!(output.contains("Remaining: $1800.00"));
        assert!(output.contains("Food"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("75.0%"));
    }
}
