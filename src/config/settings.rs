//! User settings for PocketPlan
//!
//! Display preferences and the backup retention policy. The entity data
//! itself lives in the data directory; this file only carries how the app
//! presents it.

use serde::{Deserialize, Serialize};

use super::paths::PlanPaths;
use crate::error::PlanError;
use crate::models::{AccentColor, Currency, FontSize, Theme};

/// User settings for PocketPlan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Bumped when the settings layout changes
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Color theme
    #[serde(default)]
    pub theme: Theme,

    /// Accent color for highlighted output
    #[serde(default)]
    pub accent_color: AccentColor,

    /// Display currency
    #[serde(default)]
    pub currency: Currency,

    /// Base font size
    #[serde(default)]
    pub font_size: FontSize,

    /// How many safety backups to keep before pruning old ones
    #[serde(default = "default_backup_keep")]
    pub backup_keep: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_backup_keep() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: Theme::default(),
            accent_color: AccentColor::default(),
            currency: Currency::default(),
            font_size: FontSize::default(),
            backup_keep: default_backup_keep(),
        }
    }
}

impl Settings {
    /// Read settings, or fall back to defaults when no file exists yet
    pub fn load_or_create(paths: &PlanPaths) -> Result<Self, PlanError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PlanError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PlanError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Nothing is written until the caller saves
            Ok(Settings::default())
        }
    }

    /// Persist the current settings
    pub fn save(&self, paths: &PlanPaths) -> Result<(), PlanError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PlanError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The currency symbol for formatting amounts
    pub fn currency_symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.accent_color, AccentColor::Red);
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.font_size, FontSize::Md);
        assert_eq!(settings.backup_keep, 20);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        settings.currency = Currency::Eur;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.currency, Currency::Eur);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlanPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut settings = Settings::default();
        settings.font_size = FontSize::Lg;

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
