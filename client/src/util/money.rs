//! Exact money amounts held as integer cents.
//!
//! DESIGN
//! ======
//! The store API sends prices either as JSON numbers or as decimal strings
//! (SQL `DECIMAL` columns). Both are normalized into cents on the way in so
//! cart sums compare exactly against the server-provided totals.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use std::fmt;
use std::iter::Sum;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-fractional count of cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Self = Self { cents: 0 };

    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Parse a decimal string such as `"59.99"`, `"-3.5"` or `"12"`.
    ///
    /// More than two fractional digits are rounded half-up on the third.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole_value: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        let mut cents = whole_value.checked_mul(100)?.checked_add(tenths * 10 + hundredths)?;
        if round_up {
            cents = cents.checked_add(1)?;
        }
        Some(Self { cents: if negative { -cents } else { cents } })
    }

    /// Convert a floating amount in currency units, rounding to the nearest cent.
    #[must_use]
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let scaled = (amount * 100.0).round();
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        Some(Self { cents: scaled as i64 })
    }

    /// Amount multiplied by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self { cents: self.cents.saturating_mul(i64::from(quantity)) }
    }

    /// Amount in currency units, for serialization only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self { cents: iter.fold(0_i64, |acc, m| acc.saturating_add(m.cents)) }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return int
                        .checked_mul(100)
                        .map(Self::from_cents)
                        .ok_or_else(|| D::Error::custom("amount out of range"));
                }
                number
                    .as_f64()
                    .and_then(Self::from_f64)
                    .ok_or_else(|| D::Error::custom("amount out of range"))
            }
            serde_json::Value::String(raw) => {
                Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid amount: {raw:?}")))
            }
            serde_json::Value::Null => Ok(Self::ZERO),
            _ => Err(D::Error::custom("expected number or decimal string")),
        }
    }
}
