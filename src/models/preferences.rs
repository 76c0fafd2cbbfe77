//! User preference enums
//!
//! These are part of the persisted state alongside the entity collections, so
//! they live with the models rather than the config layer. Wire values match
//! the strings written into backup files ("light", "USD", "md", ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default income category names for a fresh install
pub const DEFAULT_INCOME_CATEGORIES: [&str; 5] =
    ["Salary", "Freelance", "Investment", "Gifts", "Other"];

/// Income categories as an owned list
pub fn default_income_categories() -> Vec<String> {
    DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParsePreferenceError::new("theme", s, "light, dark")),
        }
    }
}

/// Accent color for highlighted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Red,
    Blue,
    Green,
    Purple,
}

impl AccentColor {
    pub const ALL: [AccentColor; 4] = [
        AccentColor::Red,
        AccentColor::Blue,
        AccentColor::Green,
        AccentColor::Purple,
    ];
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
            Self::Green => write!(f, "green"),
            Self::Purple => write!(f, "purple"),
        }
    }
}

impl FromStr for AccentColor {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "purple" => Ok(Self::Purple),
            _ => Err(ParsePreferenceError::new(
                "accent color",
                s,
                "red, blue, green, purple",
            )),
        }
    }
}

/// Display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Inr];

    /// The symbol shown before amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Inr => write!(f, "INR"),
        }
    }
}

impl FromStr for Currency {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "INR" => Ok(Self::Inr),
            _ => Err(ParsePreferenceError::new(
                "currency",
                s,
                "USD, EUR, GBP, INR",
            )),
        }
    }
}

/// Base font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Sm, FontSize::Md, FontSize::Lg];
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sm => write!(f, "sm"),
            Self::Md => write!(f, "md"),
            Self::Lg => write!(f, "lg"),
        }
    }
}

impl FromStr for FontSize {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            _ => Err(ParsePreferenceError::new("font size", s, "sm, md, lg")),
        }
    }
}

/// Error for an unrecognized preference value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePreferenceError {
    field: &'static str,
    value: String,
    expected: &'static str,
}

impl ParsePreferenceError {
    fn new(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParsePreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown {} '{}' (expected one of: {})",
            self.field, self.value, self.expected
        )
    }
}

impl std::error::Error for ParsePreferenceError {}
