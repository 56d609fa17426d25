//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! drift when summing. On disk an amount is a plain JSON number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::LedgerError;

/// Currency symbols accepted (and ignored) in front of an amount
const CURRENCY_SYMBOLS: [char; 5] = ['$', '¥', '￥', '€', '£'];

/// Largest magnitude, in hundredths, a single amount may have
///
/// Keeps every accepted amount exact through its JSON number form.
pub const MAX_CENTS: i64 = 999_999_999_999_999;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use cashbook::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a float, for serialization and export only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build an amount from a float, rounding to the nearest hundredth
    ///
    /// Returns `None` past [`MAX_CENTS`].
    pub fn from_f64(value: f64) -> Option<Self> {
        let scaled = (value * 100.0).round();
        if !scaled.is_finite() || scaled.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(scaled as i64))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "+3", "¥10.50", "10", ".5".
    /// Digits past the second decimal place round half away from zero.
    /// Amounts beyond [`MAX_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidAmount(s.trim().to_string());
        let text = s.trim();

        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let text = text.strip_prefix(&CURRENCY_SYMBOLS[..]).unwrap_or(text);

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= MAX_CENTS)
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. `¥10.50` or `-¥10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Saturates at the i64 bounds instead of overflowing
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Self(acc.0.saturating_add(m.0)))
    }
}
