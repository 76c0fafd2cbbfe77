//! Fixed-point currency amounts
//!
//! Amounts are kept as whole cents in an `i64`, so arithmetic never drifts
//! the way `f64` sums do. `Display` renders "12.50" without a symbol, since
//! the symbol is a user preference; [`Money::format_with_symbol`] attaches
//! one for user-facing output.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// A signed amount of money, stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Wrap a raw cent count.
    ///
    /// ```
    /// use pocketplan::models::Money;
    /// assert_eq!(Money::from_cents(1234).to_string(), "12.34");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw cent count
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part as positive cents (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from user input.
    ///
    /// Accepts "10.50", "10.5", ".5", "-10.50", "$10.50", and whole-unit
    /// strings like "10". Digits past the second decimal place are dropped.
    /// Anything else, including doubled signs, is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // One leading sign was already consumed; a second one is a typo.
        if rest.is_empty() || rest.starts_with('-') {
            return Err(MoneyParseError(rest.to_string()));
        }
        let bad = || MoneyParseError(rest.to_string());

        let cents = match rest.split_once('.') {
            Some((whole, frac)) => {
                let units: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| bad())?
                };

                let frac: String = frac.chars().take(2).collect();
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(bad());
                }
                let sub: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| bad())? * 10,
                    _ => frac.parse().map_err(|_| bad())?,
                };

                units * 100 + sub
            }
            None => rest.parse::<i64>().map_err(|_| bad())? * 100,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Prefix the amount with a currency symbol, keeping the sign outside it.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// On the wire amounts are plain numbers in currency units ("12.5", "20"),
// matching the JSON payloads embedded in backup files. Whole amounts are
// emitted without a fractional part.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric currency amount")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money::from_cents)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money::from_cents)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(E::custom("amount must be finite"));
        }
        Ok(Money::from_cents((v * 100.0).round() as i64))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_f64(MoneyVisitor)
    }
}

/// Raised when a string cannot be read as a currency amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid money format: {0}")]
pub struct MoneyParseError(pub String);
