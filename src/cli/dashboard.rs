//! Dashboard CLI command
//!
//! Prints the all-time financial overview: balance, income and expense
//! totals, category breakdowns, and recent monthly flows.

use crate::config::settings::Settings;
use crate::error::PlanResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> PlanResult<()> {
    let report = DashboardReport::generate(
        &storage.transactions.get_all()?,
        &storage.budget.get_categories()?,
    );

    print!("{}", report.format_terminal(settings.currency_symbol()));

    Ok(())
}
