//! Configuration CLI commands
//!
//! Shows and updates user settings (theme, accent color, currency, font
//! size) and manages the income category list offered when recording income.

use clap::Subcommand;
use std::fmt::Write as _;

use crate::config::settings::Settings;
use crate::error::{PlanError, PlanResult};
use crate::models::{AccentColor, Currency, FontSize, Theme};
use crate::services::IncomeCategoryService;
use crate::storage::Storage;

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings and data locations
    Show,

    /// Update one or more settings
    Set {
        /// Color theme (light, dark)
        #[arg(long)]
        theme: Option<String>,

        /// Accent color (red, blue, green, purple)
        #[arg(long)]
        accent: Option<String>,

        /// Display currency (USD, EUR, GBP, INR)
        #[arg(long)]
        currency: Option<String>,

        /// Base font size (sm, md, lg)
        #[arg(long)]
        font_size: Option<String>,

        /// How many managed backups to keep
        #[arg(long)]
        backup_keep: Option<usize>,
    },

    /// Manage income category names
    #[command(subcommand)]
    IncomeCategory(IncomeCategoryCommands),
}

/// Income category subcommands
#[derive(Subcommand)]
pub enum IncomeCategoryCommands {
    /// Add an income category
    Add {
        /// Name for the new income category
        name: String,
    },
    /// Remove an income category
    Rm {
        /// Category name (case-insensitive)
        name: String,
    },
}

/// Handle a config command
pub fn handle_config_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> PlanResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let income = IncomeCategoryService::new(storage);
            print!("{}", format_settings(storage, settings, &income.list()?));
        }

        ConfigCommands::Set {
            theme,
            accent,
            currency,
            font_size,
            backup_keep,
        } => {
            let mut changed = Vec::new();

            if let Some(value) = theme {
                settings.theme = parse_preference::<Theme>(&value)?;
                changed.push(format!("theme = {}", settings.theme));
            }
            if let Some(value) = accent {
                settings.accent_color = parse_preference::<AccentColor>(&value)?;
                changed.push(format!("accent = {}", settings.accent_color));
            }
            if let Some(value) = currency {
                settings.currency = parse_preference::<Currency>(&value)?;
                changed.push(format!("currency = {}", settings.currency));
            }
            if let Some(value) = font_size {
                settings.font_size = parse_preference::<FontSize>(&value)?;
                changed.push(format!("font size = {}", settings.font_size));
            }
            if let Some(value) = backup_keep {
                if value == 0 {
                    return Err(PlanError::Validation(
                        "Backup keep count must be at least 1".into(),
                    ));
                }
                settings.backup_keep = value;
                changed.push(format!("backup keep = {}", value));
            }

            if changed.is_empty() {
                return Err(PlanError::Validation(
                    "Nothing to change: pass --theme, --accent, --currency, \
                     --font-size, and/or --backup-keep"
                        .into(),
                ));
            }

            settings.save(storage.paths())?;

            println!("Updated settings:");
            for change in changed {
                println!("  {}", change);
            }
        }

        ConfigCommands::IncomeCategory(sub) => {
            let service = IncomeCategoryService::new(storage);
            match sub {
                IncomeCategoryCommands::Add { name } => {
                    let added = service.add(&name)?;
                    println!("Added income category: {}", added);
                }
                IncomeCategoryCommands::Rm { name } => {
                    let removed = service.remove(&name)?;
                    println!("Removed income category: {}", removed);
                }
            }
        }
    }

    Ok(())
}

/// Parse a preference value, mapping the error into a validation error
fn parse_preference<T>(value: &str) -> PlanResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| PlanError::Validation(e.to_string()))
}

/// Comma-separated list of the valid values for one preference
fn options<T: std::fmt::Display>(all: &[T]) -> String {
    all.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the `config show` output
fn format_settings(storage: &Storage, settings: &Settings, income_categories: &[String]) -> String {
    let paths = storage.paths();
    let mut out = String::new();

    let _ = writeln!(out, "Settings");
    let _ = writeln!(out, "========");
    let _ = writeln!(
        out,
        "Theme:        {:<8} [{}]",
        settings.theme.to_string(),
        options(&Theme::ALL)
    );
    let _ = writeln!(
        out,
        "Accent color: {:<8} [{}]",
        settings.accent_color.to_string(),
        options(&AccentColor::ALL)
    );
    let _ = writeln!(
        out,
        "Currency:     {} ({}) [{}]",
        settings.currency,
        settings.currency_symbol(),
        options(&Currency::ALL)
    );
    let _ = writeln!(
        out,
        "Font size:    {:<8} [{}]",
        settings.font_size.to_string(),
        options(&FontSize::ALL)
    );
    let _ = writeln!(out, "Backup keep:  {}", settings.backup_keep);
    let _ = writeln!(out);

    let _ = writeln!(out, "Income categories");
    let _ = writeln!(out, "-----------------");
    for name in income_categories {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Locations");
    let _ = writeln!(out, "---------");
    let _ = writeln!(out, "Base:     {}", paths.base_dir().display());
    let _ = writeln!(out, "Data:     {}", paths.data_dir().display());
    let _ = writeln!(out, "Backups:  {}", paths.backup_dir().display());
    let _ = writeln!(out, "Settings: {}", paths.settings_file().display());

    out
}
