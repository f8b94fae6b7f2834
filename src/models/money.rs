//! Money type for representing currency amounts
//!
//! Amounts keep the exact value they were entered or stored with (`12.345`
//! stays `12.345`) as a [`Decimal`], so sums never drift. Rounding to cents
//! happens only when an amount is formatted. The persisted form is a plain
//! JSON number in currency units (`12.5`), matching the layout written by
//! earlier versions of the tracker.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// Largest magnitude accepted from user input, in currency units
pub const MAX_INPUT_UNITS: i64 = 1_000_000_000_000;

/// A monetary amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Wrap an exact decimal amount
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from a value in currency units
    ///
    /// Uses the shortest decimal that round-trips to `units`, so `12.345`
    /// becomes exactly `12.345`. Returns `None` for NaN, infinities, and
    /// values outside the decimal range.
    pub fn from_units(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        // f64's Display never uses exponent notation
        Decimal::from_str(&units.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(units))
            .map(Self)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount in whole cents, rounded half away from zero
    pub fn cents(&self) -> i64 {
        self.rounded()
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .unwrap_or(if self.is_negative() { i64::MIN } else { i64::MAX })
    }

    /// Get the amount in currency units
    pub fn as_units(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Divide by a count; dividing by zero yields zero
    pub fn divided_by(&self, divisor: u32) -> Self {
        if divisor == 0 {
            return Self::zero();
        }
        Self(
            self.0
                .checked_div(Decimal::from(divisor))
                .unwrap_or(Decimal::ZERO),
        )
    }

    /// This amount as a percentage of `total` (0 when `total` is zero)
    pub fn percent_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            return 0.0;
        }
        self.0
            .checked_div(total.0)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|pct| pct.to_f64())
            .unwrap_or(0.0)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts decimal numbers with an optional leading currency symbol:
    /// "10.50", "$10.50", "10", "1e2", "0.001". The value is kept exactly.
    /// Magnitudes above [`MAX_INPUT_UNITS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let value = Decimal::from_str(rest)
            .or_else(|_| Decimal::from_scientific(rest))
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if value.is_sign_negative() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if value > Decimal::from(MAX_INPUT_UNITS) {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format as a bare two-decimal number ("12.50"), no currency symbol
    pub fn to_decimal_string(&self) -> String {
        let rounded = self.rounded();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{:.2}", rounded.abs())
        } else {
            format!("{:.2}", rounded.abs())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.rounded();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }

    fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

// Arithmetic saturates at the decimal range instead of panicking
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UnitsVisitor;

        impl<'de> Visitor<'de> for UnitsVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a finite amount in currency units")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Money::from_units(v).ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(Decimal::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                Ok(Money(Decimal::from(v)))
            }
        }

        deserializer.deserialize_f64(UnitsVisitor)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(
                f,
                "Amount out of range: {} (maximum is {})",
                s, MAX_INPUT_UNITS
            ),
        }
    }
}

impl std::error::Error for MoneyParseError {}
