//! Budget input record
//!
//! The flat record a user fills in for one outing. Nothing here is
//! validated: negative numbers and more overnight children than children in
//! total are kept as entered and flow through the arithmetic unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::{FieldId, FieldValue};
use super::money::Money;

/// How leader costs are funded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaderPolicy {
    /// Leader costs are part of the expenses the children's fees cover
    #[default]
    SpreadAcrossChildren,
    /// Leaders (or the group treasury) pay a contribution per leader
    TreasuryFunded,
}

impl LeaderPolicy {
    /// Map the form's yes/no switch onto a policy
    pub const fn from_treasury_flag(leaders_pay_from_treasury: bool) -> Self {
        if leaders_pay_from_treasury {
            LeaderPolicy::TreasuryFunded
        } else {
            LeaderPolicy::SpreadAcrossChildren
        }
    }

    pub const fn is_treasury_funded(&self) -> bool {
        matches!(self, LeaderPolicy::TreasuryFunded)
    }

    /// One-line explanation shown under the policy switch
    pub const fn hint(&self) -> &'static str {
        match self {
            LeaderPolicy::SpreadAcrossChildren => {
                "Leader costs are spread across the children's fees"
            }
            LeaderPolicy::TreasuryFunded => {
                "Leaders contribute out of pocket or from the group treasury"
            }
        }
    }
}

impl fmt::Display for LeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderPolicy::SpreadAcrossChildren => write!(f, "spread across children"),
            LeaderPolicy::TreasuryFunded => write!(f, "treasury funded"),
        }
    }
}

/// Everything the user enters for one outing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BudgetInput {
    /// Children taking part in total
    pub total_children: i64,

    /// Children among `total_children` who stay overnight
    pub overnight_children: i64,

    pub transport_cost_per_child: Money,
    pub transport_cost_per_leader: Money,
    pub leader_count: i64,
    pub venue_fee: Money,
    pub food_cost: Money,
    pub materials_cost: Money,

    /// Fee charged per day-only child
    pub day_rate: Money,

    /// Fee charged per overnight child
    pub overnight_rate: Money,

    pub leader_policy: LeaderPolicy,

    /// Contribution per leader, only counted when treasury funded
    pub leader_contribution: Money,
}

impl BudgetInput {
    /// Replace a single field, leaving every other field untouched
    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        match field {
            FieldId::TotalChildren => self.total_children = value.as_count(),
            FieldId::OvernightChildren => self.overnight_children = value.as_count(),
            FieldId::TransportCostPerChild => self.transport_cost_per_child = value.as_money(),
            FieldId::TransportCostPerLeader => self.transport_cost_per_leader = value.as_money(),
            FieldId::LeaderCount => self.leader_count = value.as_count(),
            FieldId::VenueFee => self.venue_fee = value.as_money(),
            FieldId::FoodCost => self.food_cost = value.as_money(),
            FieldId::MaterialsCost => self.materials_cost = value.as_money(),
            FieldId::DayRate => self.day_rate = value.as_money(),
            FieldId::OvernightRate => self.overnight_rate = value.as_money(),
            FieldId::LeadersPayFromTreasury => {
                self.leader_policy = LeaderPolicy::from_treasury_flag(value.as_flag())
            }
            FieldId::LeaderContribution => self.leader_contribution = value.as_money(),
        }
    }

    /// Read a single field
    pub fn get(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::TotalChildren => FieldValue::Count(self.total_children),
            FieldId::OvernightChildren => FieldValue::Count(self.overnight_children),
            FieldId::TransportCostPerChild => FieldValue::Money(self.transport_cost_per_child),
            FieldId::TransportCostPerLeader => FieldValue::Money(self.transport_cost_per_leader),
            FieldId::LeaderCount => FieldValue::Count(self.leader_count),
            FieldId::VenueFee => FieldValue::Money(self.venue_fee),
            FieldId::FoodCost => FieldValue::Money(self.food_cost),
            FieldId::MaterialsCost => FieldValue::Money(self.materials_cost),
            FieldId::DayRate => FieldValue::Money(self.day_rate),
            FieldId::OvernightRate => FieldValue::Money(self.overnight_rate),
            FieldId::LeadersPayFromTreasury => {
                FieldValue::Flag(self.leader_policy.is_treasury_funded())
            }
            FieldId::LeaderContribution => FieldValue::Money(self.leader_contribution),
        }
    }

    /// Whether more children stay overnight than take part in total
    pub fn has_inconsistent_counts(&self) -> bool {
        self.overnight_children > self.total_children
    }
}
