//! Money type for representing currency amounts
//!
//! Amounts are exact decimals: whatever the user typed, sub-cent digits
//! included, takes part in the arithmetic unchanged. Rounding to whole cents
//! happens only when an amount is displayed or when a rate becomes a fee.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Represents an exact monetary amount in currency units
///
/// There is a single implicit currency; the symbol is a display concern.
/// Arithmetic saturates at [`Money::MAX`] / [`Money::MIN`] instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const MAX: Money = Money(Decimal::MAX);
    pub const MIN: Money = Money(Decimal::MIN);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use scout_budget::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from an exact decimal
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Whole units, truncated toward zero; `None` when out of `i64` range
    pub fn whole_units(&self) -> Option<i64> {
        self.0.trunc().to_i64()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiply by a head count (children, leaders)
    ///
    /// Counts may be negative when the inputs are inconsistent; the product
    /// follows ordinary sign rules.
    pub fn times(&self, count: i64) -> Self {
        let count = Decimal::from(count);
        match self.0.checked_mul(count) {
            Some(product) => Self(product),
            None if self.is_negative() == count.is_sign_negative() => Self::MAX,
            None => Self::MIN,
        }
    }

    /// Exact decimal value in currency units
    pub const fn to_decimal(&self) -> Decimal {
        self.0
    }

    /// Convert a decimal amount to Money, rounding up to the next whole cent
    ///
    /// `12.341` becomes `12.35`, `-0.019` becomes `-0.01`.
    pub fn from_decimal_ceil(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "€10.50", "$10.50", "10", "10,50".
    /// Every decimal digit is kept, so "0.125" stays 0.125. Amounts too large
    /// to represent are rejected like any other malformed text.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s
            .strip_prefix('€')
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s)
            .trim();

        // Accept a decimal comma as typed on European keyboards
        let normalized = s.replace(',', ".");

        let well_formed = normalized.chars().any(|c| c.is_ascii_digit())
            && normalized.chars().all(|c| c.is_ascii_digit() || c == '.')
            && normalized.matches('.').count() <= 1;
        if !well_formed {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let mut digits = String::with_capacity(normalized.len() + 2);
        if normalized.starts_with('.') {
            digits.push('0');
        }
        digits.push_str(&normalized);
        if normalized.ends_with('.') {
            digits.push('0');
        }

        let amount = Decimal::from_str_exact(&digits)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -amount } else { amount }))
    }

    /// Format with a currency symbol, rounded to whole cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.rounded_to_cents();
        if cents.is_sign_negative() {
            format!("-{}{}", symbol, cents.abs())
        } else {
            format!("{}{}", symbol, cents)
        }
    }

    // Half away from zero, like `toFixed(2)`; never "-0.00"
    fn rounded_to_cents(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);
        rounded
    }

    // Exact value with at least two decimals: "10.50", "0.125"
    fn exact_text(&self) -> String {
        let mut amount = self.0.normalize();
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        amount.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.rounded_to_cents().to_string())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match self.0.checked_add(other.0) {
            Some(sum) => Self(sum),
            None if self.is_negative() => Self::MIN,
            None => Self::MAX,
        }
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// Input files carry amounts the way people write them ("12.50"), not cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.exact_text())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a currency amount such as \"12.50\" or 12.5")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                Money::parse(v).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(Decimal::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                Ok(Money(Decimal::from(v)))
            }

            // Shortest round-trip text of the float, so 0.125 stays 0.125
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Money::parse(&v.to_string()).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.to_decimal(), dec!(10.50));
        assert_eq!(m.whole_units(), Some(10));
        assert_eq!(Money::from_cents(-1999).whole_units(), Some(-19));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(5)), "    0.05");
    }

    #[test]
    fn test_display_rounds_sub_cent_amounts() {
        assert_eq!(Money::from_decimal(dec!(0.125)).to_string(), "0.13");
        assert_eq!(Money::from_decimal(dec!(-0.125)).to_string(), "-0.13");
        assert_eq!(Money::from_decimal(dec!(7)).to_string(), "7.00");
        assert_eq!(Money::from_decimal(dec!(-0.001)).to_string(), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(23600).format_with_symbol("€ "), "€ 236.00");
        assert_eq!(Money::from_cents(-23600).format_with_symbol("€ "), "-€ 236.00");
        assert_eq!(Money::from_decimal(dec!(-0.004)).format_with_symbol("€ "), "€ 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(-a, Money::from_cents(-1000));
        assert_eq!(b.times(3), Money::from_cents(1500));
        assert_eq!(b.times(-2), Money::from_cents(-1000));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::parse("10000000000000000000000").unwrap();

        assert_eq!(huge.times(i64::MAX), Money::MAX);
        assert_eq!(huge.times(i64::MIN), Money::MIN);
        assert_eq!((-huge).times(i64::MIN), Money::MAX);
        assert_eq!(Money::MAX + Money::from_cents(1), Money::MAX);
        assert_eq!(Money::MIN - Money::from_cents(1), Money::MIN);
        assert_eq!(Money::from_cents(100).times(i64::MAX).whole_units(), Some(i64::MAX));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("€10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_cents(1000));
        assert_eq!(Money::parse("10.5").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("10,5").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse(".5").unwrap(), Money::from_cents(50));
        assert_eq!(Money::parse("7.").unwrap(), Money::from_cents(700));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e3").is_err());
    }

    #[test]
    fn test_parse_keeps_sub_cent_digits() {
        assert_eq!(Money::parse("0.059").unwrap().to_decimal(), dec!(0.059));

        let per_child = Money::parse("0.125").unwrap();
        assert_eq!(per_child.times(8), Money::from_cents(100));
    }

    #[test]
    fn test_parse_rejects_out_of_range_amounts() {
        let big = Money::parse("922337203685477581").unwrap();
        assert_eq!(big.to_decimal(), dec!(922337203685477581));

        assert!(matches!(
            Money::parse("1000000000000000000000000000000"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(Money::from_cents(2360).to_decimal(), dec!(23.60));
        assert_eq!(Money::from_decimal_ceil(dec!(23.6)), Money::from_cents(2360));
        assert_eq!(Money::from_decimal_ceil(dec!(12.341)), Money::from_cents(1235));
        assert_eq!(Money::from_decimal_ceil(dec!(-0.019)), Money::from_cents(-1));
        assert_eq!(Money::from_decimal_ceil(Decimal::ZERO), Money::zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let exact = Money::parse("0.125").unwrap();
        assert_eq!(serde_json::to_string(&exact).unwrap(), "\"0.125\"");

        let from_number: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(from_number, Money::from_cents(1250));
        let from_sub_cent: Money = serde_json::from_str("0.125").unwrap();
        assert_eq!(from_sub_cent, exact);
        let from_int: Money = serde_json::from_str("50").unwrap();
        assert_eq!(from_int, Money::from_cents(5000));
    }
}
