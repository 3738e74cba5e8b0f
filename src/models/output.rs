//! Derived budget figures
//!
//! Nothing in here is stored: a `BudgetOutput` is rebuilt from the input
//! record every time it is needed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether the outing ends up in the black
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    Surplus,
    BreakEven,
    Deficit,
}

impl BalanceStatus {
    pub fn from_balance(balance: Money) -> Self {
        if balance.is_positive() {
            BalanceStatus::Surplus
        } else if balance.is_zero() {
            BalanceStatus::BreakEven
        } else {
            BalanceStatus::Deficit
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceStatus::Surplus => write!(f, "IN THE BLACK"),
            BalanceStatus::BreakEven => write!(f, "BREAK-EVEN"),
            BalanceStatus::Deficit => write!(f, "IN THE RED"),
        }
    }
}

/// Per-child fee that exactly covers the children's share of expenses
///
/// Kept as an exact decimal; a rate like 100/3 is not a whole number of
/// cents, and rounding is applied only when the rate becomes a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakEvenRate(Decimal);

impl BreakEvenRate {
    pub const fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// The rate with a premium factor applied (e.g. 1.2 for +20%)
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self(self.0.checked_mul(factor).unwrap_or(
            if self.0.is_sign_negative() == factor.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            },
        ))
    }

    /// Round up to the next whole cent so fees never fall short
    pub fn ceil_to_cents(&self) -> Money {
        Money::from_decimal_ceil(self.0)
    }

    /// The rate as an amount; formatting rounds it to the nearest cent
    pub fn display_amount(&self) -> Money {
        Money::from_decimal(self.0)
    }
}

impl fmt::Display for BreakEvenRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_amount(), f)
    }
}

/// Every figure derived from a `BudgetInput`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOutput {
    /// Children attending without an overnight stay; negative when the
    /// overnight count exceeds the total
    pub day_children: i64,
    pub total_expenses: Money,
    pub children_income: Money,
    pub leader_income: Money,
    pub total_income: Money,
    pub balance: Money,
    /// Part of the expenses the children's fees have to pay for
    pub expenses_children_must_cover: Money,
    pub break_even_rate: BreakEvenRate,
    pub status: BalanceStatus,
}
