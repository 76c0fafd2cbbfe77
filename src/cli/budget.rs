//! `budget` subcommands
//!
//! Implements CLI commands for the monthly budget: the income figure, the
//! category list, and the spending goals that cap individual categories.

use chrono::Datelike;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::format_budget_overview;
use crate::error::{PlanError, PlanResult};
use crate::models::{Money, SpendingGoalId};
use crate::reports::{allocation_summary, BudgetStatusReport, SpendingGoalsReport};
use crate::services::{BudgetService, GoalService};
use crate::storage::Storage;

/// Plan monthly income and per-category allocations
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget allocation and this month's budget vs. actual
    Show,

    /// Show or set the monthly income figure
    Income {
        /// New monthly income; shows the current value when omitted
        amount: Option<String>,
    },

    /// Add a budget category
    Add {
        /// Name for the new category
        name: String,
        /// Budgeted amount (e.g., "300" or "299.99")
        amount: String,
    },

    /// Change a category's amount or name
    Set {
        /// Category to change, by name or id
        category: String,
        /// New budgeted amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a budget category
    Rm {
        /// Category to remove, by name or id
        category: String,
    },

    /// Spending goal commands
    #[command(subcommand)]
    Goal(SpendingGoalCommands),
}

/// Spending goal subcommands
#[derive(Subcommand)]
pub enum SpendingGoalCommands {
    /// Add a spending goal capping one category for its deadline month
    Add {
        /// Budget category name or ID
        category: String,
        /// Goal title
        title: String,
        /// Target amount the category spending should stay under
        target: String,
        /// Deadline (YYYY-MM-DD); the goal measures that calendar month
        #[arg(short, long, default_value = "")]
        deadline: String,
    },
    /// List spending goals with progress
    List,
    /// Delete a spending goal
    Rm {
        /// Spending goal ID
        id: String,
    },
}

/// Dispatch one `budget` subcommand
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PlanResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        BudgetCommands::Show => {
            let categories = service.list_categories()?;
            let summary = allocation_summary(&categories, service.monthly_income()?);
            print!("{}", format_budget_overview(&categories, &summary, symbol));

            let today = chrono::Local::now().date_naive();
            let transactions = storage.transactions.get_all()?;
            let report = BudgetStatusReport::generate(
                &transactions,
                &categories,
                today.year(),
                today.month(),
            );
            println!();
            print!("{}", report.format_terminal(symbol));
        }

        BudgetCommands::Income { amount } => match amount {
            Some(amount_str) => {
                let income = parse_amount(&amount_str)?;
                service.set_monthly_income(income)?;
                println!("Monthly income set to {}", income.format_with_symbol(symbol));
            }
            None => {
                let income = service.monthly_income()?;
                println!("Monthly income: {}", income.format_with_symbol(symbol));
            }
        },

        BudgetCommands::Add { name, amount } => {
            let amount = parse_amount(&amount)?;
            let category = service.add_category(&name, amount)?;

            println!("Created budget category: {}", category.name);
            println!("  ID:     {}", category.id);
            println!("  Amount: {}", category.amount.format_with_symbol(symbol));
            println!("  Color:  {}", category.color);
        }

        BudgetCommands::Set {
            category,
            amount,
            name,
        } => {
            if amount.is_none() && name.is_none() {
                return Err(PlanError::Validation(
                    "Nothing to change: pass --amount and/or --name".into(),
                ));
            }

            let mut found = service
                .find_category(&category)?
                .ok_or_else(|| PlanError::category_not_found(&category))?;

            if let Some(new_name) = name {
                found = service.rename_category(&found.id, &new_name)?;
                println!("Renamed category to: {}", found.name);
            }
            if let Some(amount_str) = amount {
                let new_amount = parse_amount(&amount_str)?;
                found = service.set_category_amount(&found.id, new_amount)?;
                println!(
                    "Set {} budget to {}",
                    found.name,
                    found.amount.format_with_symbol(symbol)
                );
            }
        }

        BudgetCommands::Rm { category } => {
            let found = service
                .find_category(&category)?
                .ok_or_else(|| PlanError::category_not_found(&category))?;

            service.delete_category(&found.id)?;
            println!("Deleted budget category: {}", found.name);
        }

        BudgetCommands::Goal(goal_cmd) => {
            handle_spending_goal_command(storage, settings, goal_cmd)?;
        }
    }

    Ok(())
}

/// Handle a spending goal command
fn handle_spending_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SpendingGoalCommands,
) -> PlanResult<()> {
    let goals = GoalService::new(storage);
    let budget = BudgetService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        SpendingGoalCommands::Add {
            category,
            title,
            target,
            deadline,
        } => {
            let found = budget
                .find_category(&category)?
                .ok_or_else(|| PlanError::category_not_found(&category))?;
            let target = parse_amount(&target)?;

            let goal = goals.add_spending_goal(&found.id, &title, target, &deadline)?;

            println!("Created spending goal: {}", goal.title);
            println!("  ID:       {}", goal.id);
            println!("  Category: {}", found.name);
            println!("  Target:   {}", goal.target_amount.format_with_symbol(symbol));
            if !goal.deadline.is_empty() {
                println!("  Deadline: {}", goal.deadline);
            }
        }

        SpendingGoalCommands::List => {
            let today = chrono::Local::now().date_naive();
            let report = SpendingGoalsReport::generate(
                &goals.list_spending_goals()?,
                &budget.list_categories()?,
                &storage.transactions.get_all()?,
                today,
            );
            print!("{}", report.format_terminal(symbol));
        }

        SpendingGoalCommands::Rm { id } => {
            let goal_id = SpendingGoalId::from_raw(id.trim());
            let deleted = goals.delete_spending_goal(&goal_id)?;
            println!("Deleted spending goal: {}", deleted.title);
        }
    }

    Ok(())
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
