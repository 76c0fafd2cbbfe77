//! Uuid-backed id newtypes, one per entity
//!
//! Ids are opaque strings end to end — they appear verbatim in backup files
//! and one category id is a reserved literal — so the wrappers hold the raw
//! string and only generation is UUID-based. Using newtype wrappers prevents
//! accidentally mixing up IDs from different entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Reserved id of the sentinel "Other" budget category
pub const OTHER_CATEGORY_ID: &str = "default-other";

/// Declares a uuid-backed id newtype with serde and Display support
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new random ID
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), Uuid::new_v4()))
            }

            /// Wrap an existing raw id string
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ParseIdError);
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(TransactionId, "txn");
define_id!(CategoryId, "cat");
define_id!(SavingsGoalId, "sav");
define_id!(SpendingGoalId, "goal");

impl CategoryId {
    /// Id of the sentinel "Other" category
    pub fn other() -> Self {
        Self(OTHER_CATEGORY_ID.to_string())
    }

    /// Whether this id belongs to the sentinel "Other" category
    pub fn is_other(&self) -> bool {
        self.0 == OTHER_CATEGORY_ID
    }
}

/// Error returned when parsing an empty id string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError;

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id cannot be empty")
    }
}

impl std::error::Error for ParseIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TransactionId::generate();
        let b = TransactionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_id_prefix() {
        let id = TransactionId::generate();
        assert!(id.as_str().starts_with("txn-"));

        let id = SavingsGoalId::generate();
        assert!(id.as_str().starts_with("sav-"));
    }

    #[test]
    fn test_display_is_raw_string() {
        let id = CategoryId::from_raw("default-other");
        assert_eq!(id.to_string(), "default-other");
    }

    #[test]
    fn test_sentinel_helpers() {
        assert!(CategoryId::other().is_other());
        assert!(!CategoryId::generate().is_other());
        assert_eq!(CategoryId::other().as_str(), OTHER_CATEGORY_ID);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("".parse::<TransactionId>().is_err());
        assert!("  ".parse::<TransactionId>().is_err());
        assert!("txn-abc".parse::<TransactionId>().is_ok());
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = CategoryId::from_raw("default-other");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"default-other\"");

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
