//! Savings goal CLI commands
//!
//! Implements CLI commands for savings goals: creating, funding, listing with
//! progress, and deleting.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::models::{Money, SavingsGoalId, SAVINGS_GOAL_CATEGORIES};
use crate::reports::SavingsReport;
use crate::services::{CreateSavingsGoalInput, GoalService};
use crate::storage::Storage;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Add a savings goal
    Add {
        /// Goal title
        title: String,
        /// Target amount (e.g., "1000" or "999.99")
        target: String,
        /// Goal category (Emergency, Travel, Transportation, Home,
        /// Investment, or Other)
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        deadline: String,
    },
    /// Record a contribution toward a goal
    Fund {
        /// Savings goal ID
        id: String,
        /// Contribution amount
        amount: String,
    },
    /// List savings goals with progress
    List,
    /// Delete a savings goal
    Rm {
        /// Savings goal ID
        id: String,
    },
}

/// Handle a savings goal command
pub fn handle_savings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> PlanResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        SavingsCommands::Add {
            title,
            target,
            category,
            current,
            deadline,
        } => {
            let goal = service.add_savings_goal(CreateSavingsGoalInput {
                title,
                category: canonical_category(&category),
                current_amount: parse_amount(&current)?,
                target_amount: parse_amount(&target)?,
                deadline,
            })?;

            println!("Created savings goal: {}", goal.title);
            println!("  ID:       {}", goal.id);
            println!("  Category: {}", goal.category);
            println!(
                "  Progress: {} of {}",
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol)
            );
            if !goal.deadline.is_empty() {
                println!("  Deadline: {}", goal.deadline);
            }
        }

        SavingsCommands::Fund { id, amount } => {
            let goal_id = SavingsGoalId::from_raw(id.trim());
            let amount = parse_amount(&amount)?;

            let goal = service.fund_savings_goal(&goal_id, amount)?;

            println!(
                "Added {} to '{}'",
                amount.format_with_symbol(symbol),
                goal.title
            );
            println!(
                "  Now at {} of {} ({:.1}%)",
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                goal.progress_percent()
            );
            if goal.is_complete() {
                println!("  Goal reached!");
            }
        }

        SavingsCommands::List => {
            let today = chrono::Local::now().date_naive();
            let report = SavingsReport::generate(&service.list_savings_goals()?, today);
            print!("{}", report.format_terminal(symbol));
        }

        SavingsCommands::Rm { id } => {
            let goal_id = SavingsGoalId::from_raw(id.trim());
            let deleted = service.delete_savings_goal(&goal_id)?;
            println!("Deleted savings goal: {}", deleted.title);
        }
    }

    Ok(())
}

/// Match a category argument against the offered labels, keeping the
/// canonical casing on a hit and the raw value otherwise
fn canonical_category(raw: &str) -> String {
    let trimmed = raw.trim();
    SAVINGS_GOAL_CATEGORIES
        .iter()
        .find(|label| label.eq_ignore_ascii_case(trimmed))
        .map(|label| label.to_string())
        .unwrap_or_else(|| trimmed.to_string())
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
