//! Goal progress reports
//!
//! Covers both goal kinds: spending goals (a cap on one budget category for
//! the month the deadline falls in) and savings goals (progress toward a
//! target amount). Spending progress is capped at 100% for display; savings
//! progress is left uncapped so overfunded goals stand out.

use chrono::{Datelike, NaiveDate};

use crate::models::{BudgetCategory, Money, SavingsGoal, SpendingGoal, Transaction};

use super::deadline::{classify_deadline, parse_deadline_date, DeadlineStatus};

/// Progress of one spending goal
#[derive(Debug, Clone)]
pub struct SpendingGoalRow {
    pub title: String,
    /// None when the linked category no longer exists
    pub category: Option<String>,
    pub target: Money,
    /// Expenses in the linked category during the deadline month
    pub spent: Money,
    /// Spent share of the target, capped at 100
    pub percent: f64,
    pub over_target: bool,
    pub deadline: DeadlineStatus,
}

/// All spending goals measured against the transaction history
#[derive(Debug, Clone)]
pub struct SpendingGoalsReport {
    pub rows: Vec<SpendingGoalRow>,
}

impl SpendingGoalsReport {
    pub fn generate(
        goals: &[SpendingGoal],
        budget: &[BudgetCategory],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Self {
        let rows = goals
            .iter()
            .map(|goal| {
                let category = budget
                    .iter()
                    .find(|c| c.id == goal.category_id)
                    .map(|c| c.name.clone());

                // Without a readable deadline there is no month to measure,
                // and an orphaned goal has nothing to match against.
                let spent = match (parse_deadline_date(&goal.deadline), &category) {
                    (Some(date), Some(name)) => {
                        let key = (date.year(), date.month());
                        transactions
                            .iter()
                            .filter(|t| {
                                t.is_expense()
                                    && t.category == *name
                                    && t.month_key() == Some(key)
                            })
                            .map(|t| t.amount)
                            .sum()
                    }
                    _ => Money::zero(),
                };

                let percent = if goal.target_amount.cents() <= 0 {
                    0.0
                } else {
                    let ratio = spent.cents() as f64 / goal.target_amount.cents() as f64;
                    ratio.min(1.0) * 100.0
                };

                SpendingGoalRow {
                    title: goal.title.clone(),
                    category,
                    target: goal.target_amount,
                    spent,
                    percent,
                    over_target: spent > goal.target_amount,
                    deadline: classify_deadline(&goal.deadline, today),
                }
            })
            .collect();

        Self { rows }
    }

    /// Render the savings section for the terminal
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending goals\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No spending goals set.\n");
            return output;
        }

        for row in &self.rows {
            let category = row.category.as_deref().unwrap_or("(category removed)");
            output.push_str(&format!("{} [{}]\n", row.title, category));
            output.push_str(&format!(
                "  {} of {} ({:.0}%){}  {}\n",
                row.spent.format_with_symbol(symbol),
                row.target.format_with_symbol(symbol),
                row.percent,
                if row.over_target { "  OVER" } else { "" },
                row.deadline
            ));
        }

        output
    }
}

/// Savings goals with aggregate totals
#[derive(Debug, Clone)]
pub struct SavingsRow {
    pub title: String,
    pub category: String,
    pub current: Money,
    pub target: Money,
    /// Uncapped progress percentage
    pub percent: f64,
    pub remaining: Money,
    pub deadline: DeadlineStatus,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct SavingsReport {
    pub rows: Vec<SavingsRow>,
    pub total_saved: Money,
    pub total_target: Money,
    /// Total saved over total target, 0 when no targets are set
    pub overall_percent: f64,
}

impl SavingsReport {
    pub fn generate(goals: &[SavingsGoal], today: NaiveDate) -> Self {
        let rows: Vec<SavingsRow> = goals
            .iter()
            .map(|goal| SavingsRow {
                title: goal.title.clone(),
                category: goal.category.clone(),
                current: goal.current_amount,
                target: goal.target_amount,
                percent: goal.progress_percent(),
                remaining: goal.remaining(),
                deadline: classify_deadline(&goal.deadline, today),
                color: goal.color.clone(),
            })
            .collect();

        let total_saved: Money = rows.iter().map(|r| r.current).sum();
        let total_target: Money = rows.iter().map(|r| r.target).sum();
        let overall_percent = if total_target.cents() <= 0 {
            0.0
        } else {
            total_saved.cents() as f64 / total_target.cents() as f64 * 100.0
        };

        Self {
            rows,
            total_saved,
            total_target,
            overall_percent,
        }
    }

    /// Render the goal list as plain text
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Savings goals\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No savings goals yet.\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!("{} [{}]\n", row.title, row.category));
            output.push_str(&format!(
                "  {} of {} ({:.1}%)  remaining {}  {}\n",
                row.current.format_with_symbol(symbol),
                row.target.format_with_symbol(symbol),
                row.percent,
                row.remaining.format_with_symbol(symbol),
                row.deadline
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total: {} of {} ({:.1}%)\n",
            self.total_saved.format_with_symbol(symbol),
            self.total_target.format_with_symbol(symbol),
            self.overall_percent
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::CategoryId;
    use crate::models::TransactionKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn expense(category: &str, cents: i64, date: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "test",
            Money::from_cents(cents),
            category,
            date,
        )
    }

    fn food_budget() -> (CategoryId, Vec<BudgetCategory>) {
        let cat = BudgetCategory::new("Food", Money::from_cents(30000), "#f97316");
        (cat.id.clone(), vec![cat])
    }

    #[test]
    fn test_spending_goal_sums_deadline_month() {
        let (cat_id, budget) = food_budget();
        let goals = vec![SpendingGoal::new(
            cat_id,
            "March food cap",
            Money::from_cents(20000),
            "2024-03-20",
        )];
        let transactions = vec![
            expense("Food", 5000, "2024-03-02"),
            expense("Food", 7000, "2024-03-15"),
            expense("Food", 9000, "2024-02-28"),
            expense("Rent", 80000, "2024-03-01"),
        ];

        let report = SpendingGoalsReport::generate(&goals, &budget, &transactions, today());
        let row = &report.rows[0];
        assert_eq!(row.spent, Money::from_cents(12000));
        assert!((row.percent - 60.0).abs() < 1e-9);
        assert!(!row.over_target);
        assert_eq!(row.category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_spending_goal_percent_caps_at_100() {
        let (cat_id, budget) = food_budget();
        let goals = vec![SpendingGoal::new(
            cat_id,
            "Tight cap",
            Money::from_cents(1000),
            "2024-03-20",
        )];
        let transactions = vec![expense("Food", 2500, "2024-03-02")];

        let report = SpendingGoalsReport::generate(&goals, &budget, &transactions, today());
        let row = &report.rows[0];
        assert_eq!(row.percent, 100.0);
        assert!(row.over_target);
    }

    #[test]
    fn test_orphaned_goal_still_listed() {
        let (_, budget) = food_budget();
        let goals = vec![SpendingGoal::new(
            CategoryId::from_raw("cat-gone"),
            "Orphan",
            Money::from_cents(1000),
            "2024-03-20",
        )];
        let transactions = vec![expense("Food", 2500, "2024-03-02")];

        let report = SpendingGoalsReport::generate(&goals, &budget, &transactions, today());
        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert!(row.category.is_none());
        assert!(row.spent.is_zero());
        assert_eq!(row.percent, 0.0);
    }

    #[test]
    fn test_unreadable_deadline_counts_nothing() {
        let (cat_id, budget) = food_budget();
        let goals = vec![SpendingGoal::new(
            cat_id,
            "Broken deadline",
            Money::from_cents(1000),
            "soonish",
        )];
        let transactions = vec![expense("Food", 2500, "2024-03-02")];

        let report = SpendingGoalsReport::generate(&goals, &budget, &transactions, today());
        let row = &report.rows[0];
        assert!(row.spent.is_zero());
        assert_eq!(row.deadline, DeadlineStatus::NoDeadline);
    }

    #[test]
    fn test_zero_target_reports_zero_percent() {
        let (cat_id, budget) = food_budget();
        let goals = vec![SpendingGoal::new(cat_id, "No cap", Money::zero(), "2024-03-20")];
        let transactions = vec![expense("Food", 2500, "2024-03-02")];

        let report = SpendingGoalsReport::generate(&goals, &budget, &transactions, today());
        assert_eq!(report.rows[0].percent, 0.0);
    }

    #[test]
    fn test_savings_aggregates() {
        let goals = vec![
            SavingsGoal::new(
                "Emergency",
                "Emergency",
                Money::from_cents(25000),
                Money::from_cents(100000),
                "2024-12-31",
                "#f97316",
            ),
            SavingsGoal::new(
                "Trip",
                "Travel",
                Money::from_cents(75000),
                Money::from_cents(100000),
                "",
                "#ef4444",
            ),
        ];

        let report = SavingsReport::generate(&goals, today());
        assert_eq!(report.total_saved, Money::from_cents(100000));
        assert_eq!(report.total_target, Money::from_cents(200000));
        assert!((report.overall_percent - 50.0).abs() < 1e-9);
        assert_eq!(report.rows[1].deadline, DeadlineStatus::NoDeadline);
    }

    #[test]
    fn test_savings_percent_uncapped_in_rows() {
        let goals = vec![SavingsGoal::new(
            "Overfunded",
            "Other",
            Money::from_cents(15000),
            Money::from_cents(10000),
            "",
            "#10b981",
        )];

        let report = SavingsReport::generate(&goals, today());
        assert!((report.rows[0].percent - 150.0).abs() < 1e-9);
        assert!(report.rows[0].remaining.is_zero());
    }

    #[test]
    fn test_empty_reports_render() {
        let spending = SpendingGoalsReport::generate(&[], &[], &[], today());
        assert!(spending.format_terminal("$").contains("No spending goals"));

        let savings = SavingsReport::generate(&[], today());
        assert!(savings.format_terminal("$").contains("No savings goals"));
    }
}
