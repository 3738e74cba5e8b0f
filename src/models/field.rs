//! Field identifiers and values for budget edits
//!
//! Every edit the user makes targets exactly one of twelve fields. A field
//! has a stable kebab-case name used on the command line and in `--set`
//! expressions, a human label, and a kind that decides how raw text is read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::BudgetError;

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A head count (children, leaders)
    Count,
    /// A currency amount
    Money,
    /// An on/off policy switch
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Count => write!(f, "count"),
            FieldKind::Money => write!(f, "money"),
            FieldKind::Flag => write!(f, "flag"),
        }
    }
}

/// The closed set of editable budget fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    TotalChildren,
    OvernightChildren,
    TransportCostPerChild,
    TransportCostPerLeader,
    LeaderCount,
    VenueFee,
    FoodCost,
    MaterialsCost,
    DayRate,
    OvernightRate,
    LeadersPayFromTreasury,
    LeaderContribution,
}

impl FieldId {
    /// All fields, in form order
    pub const ALL: [FieldId; 12] = [
        FieldId::TotalChildren,
        FieldId::OvernightChildren,
        FieldId::TransportCostPerChild,
        FieldId::TransportCostPerLeader,
        FieldId::LeaderCount,
        FieldId::VenueFee,
        FieldId::FoodCost,
        FieldId::MaterialsCost,
        FieldId::DayRate,
        FieldId::OvernightRate,
        FieldId::LeadersPayFromTreasury,
        FieldId::LeaderContribution,
    ];

    /// Stable kebab-case name
    pub const fn name(&self) -> &'static str {
        match self {
            FieldId::TotalChildren => "total-children",
            FieldId::OvernightChildren => "overnight-children",
            FieldId::TransportCostPerChild => "transport-cost-per-child",
            FieldId::TransportCostPerLeader => "transport-cost-per-leader",
            FieldId::LeaderCount => "leader-count",
            FieldId::VenueFee => "venue-fee",
            FieldId::FoodCost => "food-cost",
            FieldId::MaterialsCost => "materials-cost",
            FieldId::DayRate => "day-rate",
            FieldId::OvernightRate => "overnight-rate",
            FieldId::LeadersPayFromTreasury => "leaders-pay-from-treasury",
            FieldId::LeaderContribution => "leader-contribution",
        }
    }

    /// Human-readable label for reports and listings
    pub const fn label(&self) -> &'static str {
        match self {
            FieldId::TotalChildren => "Total children",
            FieldId::OvernightChildren => "Children staying overnight",
            FieldId::TransportCostPerChild => "Transport per child",
            FieldId::TransportCostPerLeader => "Transport per leader",
            FieldId::LeaderCount => "Number of leaders",
            FieldId::VenueFee => "Venue fee",
            FieldId::FoodCost => "Food",
            FieldId::MaterialsCost => "Materials and activities",
            FieldId::DayRate => "Day-only fee",
            FieldId::OvernightRate => "Overnight fee",
            FieldId::LeadersPayFromTreasury => "Leaders funded by treasury",
            FieldId::LeaderContribution => "Contribution per leader",
        }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            FieldId::TotalChildren | FieldId::OvernightChildren | FieldId::LeaderCount => {
                FieldKind::Count
            }
            FieldId::LeadersPayFromTreasury => FieldKind::Flag,
            _ => FieldKind::Money,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = BudgetError;

    /// Accepts the kebab-case name or its snake_case spelling, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| BudgetError::UnknownField(s.trim().to_string()))
    }
}

/// A new value for a field
///
/// Values are coerced to the field's kind when applied, so a mismatched
/// value never makes an edit fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Count(i64),
    Money(Money),
    Flag(bool),
}

impl FieldValue {
    /// Read raw text for a field the way a numeric form input does
    ///
    /// Text that cannot be read as the field's kind becomes zero (or `false`
    /// for flags). Flags accept `true/false`, `yes/no`, `on/off` and numbers.
    pub fn parse_lenient(field: FieldId, raw: &str) -> Self {
        let raw = raw.trim();
        match field.kind() {
            FieldKind::Count => FieldValue::Count(parse_count(raw).unwrap_or(0)),
            FieldKind::Money => FieldValue::Money(Money::parse(raw).unwrap_or_default()),
            FieldKind::Flag => FieldValue::Flag(parse_flag(raw)),
        }
    }

    /// Value as a head count
    ///
    /// Money truncates to whole units (saturating at the `i64` range),
    /// flags read as 0 or 1.
    pub fn as_count(&self) -> i64 {
        match self {
            FieldValue::Count(n) => *n,
            FieldValue::Money(m) => m.whole_units().unwrap_or(if m.is_negative() {
                i64::MIN
            } else {
                i64::MAX
            }),
            FieldValue::Flag(b) => i64::from(*b),
        }
    }

    /// Value as a currency amount
    pub fn as_money(&self) -> Money {
        match self {
            FieldValue::Count(n) => Money::from_decimal(Decimal::from(*n)),
            FieldValue::Money(m) => *m,
            FieldValue::Flag(b) => Money::from_decimal(Decimal::from(i64::from(*b))),
        }
    }

    /// Value as a flag: any non-zero number is `true`
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Count(n) => *n != 0,
            FieldValue::Money(m) => !m.is_zero(),
            FieldValue::Flag(b) => *b,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Count(n) => write!(f, "{}", n),
            FieldValue::Money(m) => write!(f, "{}", m),
            FieldValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Count(n)
    }
}

impl From<Money> for FieldValue {
    fn from(m: Money) -> Self {
        FieldValue::Money(m)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Parse a count, accepting a decimal value by truncating it
///
/// Counts outside the `i64` range are unreadable.
fn parse_count(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .or_else(|| Money::parse(raw).ok().and_then(|m| m.whole_units()))
}

fn parse_flag(raw: &str) -> bool {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" => true,
        "false" | "no" | "n" | "off" | "" => false,
        other => parse_count(other).map(|n| n != 0).unwrap_or(false),
    }
}
