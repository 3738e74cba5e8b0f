//! Budget model
//!
//! Holds the input record for one outing and derives expenses, income,
//! balance and the break-even fee from it. Every figure is recomputed from
//! the current input on each read.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    BalanceStatus, BreakEvenRate, BudgetInput, BudgetOutput, FieldId, FieldValue, Money,
};

/// Overnight attendance costs 20% more than a day-only place at break-even
pub fn overnight_premium() -> Decimal {
    Decimal::new(12, 1)
}

/// Owns the input record and exposes the edits the form can make
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetModel {
    input: BudgetInput,
}

impl BudgetModel {
    /// Create a model with every field at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from an existing input record
    pub fn from_input(input: BudgetInput) -> Self {
        Self { input }
    }

    /// Current input record
    pub fn input(&self) -> &BudgetInput {
        &self.input
    }

    pub fn into_input(self) -> BudgetInput {
        self.input
    }

    /// Replace a single field
    ///
    /// No validation is performed: negative amounts and inconsistent head
    /// counts are stored as given.
    pub fn set_field(&mut self, field: FieldId, value: FieldValue) {
        debug!(field = %field, value = %value, "setting budget field");
        self.input.set(field, value);
    }

    /// All derived figures for the current input
    pub fn outputs(&self) -> BudgetOutput {
        calculate(&self.input)
    }

    /// Set both fees to the break-even rate, rounded up to whole cents
    ///
    /// The overnight fee carries the fixed overnight premium. With no
    /// children both fees become zero.
    pub fn apply_break_even_rates(&mut self) {
        let rate = self.outputs().break_even_rate;
        let day_rate = rate.ceil_to_cents();
        let overnight_rate = rate.scaled(overnight_premium()).ceil_to_cents();

        debug!(
            break_even_rate = %rate,
            day_rate = %day_rate,
            overnight_rate = %overnight_rate,
            "applying break-even rates"
        );

        self.input.day_rate = day_rate;
        self.input.overnight_rate = overnight_rate;
    }
}

/// Derive every output figure from an input record
pub fn calculate(input: &BudgetInput) -> BudgetOutput {
    let day_children = input
        .total_children
        .saturating_sub(input.overnight_children);

    let total_expenses = input.transport_cost_per_child.times(input.total_children)
        + input.transport_cost_per_leader.times(input.leader_count)
        + input.venue_fee
        + input.food_cost
        + input.materials_cost;

    let children_income = input.day_rate.times(day_children)
        + input.overnight_rate.times(input.overnight_children);

    let leader_income = if input.leader_policy.is_treasury_funded() {
        input.leader_contribution.times(input.leader_count)
    } else {
        Money::zero()
    };

    let total_income = children_income + leader_income;
    let balance = total_income - total_expenses;

    let expenses_children_must_cover = if input.leader_policy.is_treasury_funded() {
        total_expenses - leader_income
    } else {
        total_expenses
    };

    let break_even_rate = if input.total_children > 0 {
        BreakEvenRate::new(
            expenses_children_must_cover.to_decimal() / Decimal::from(input.total_children),
        )
    } else {
        BreakEvenRate::zero()
    };

    BudgetOutput {
        day_children,
        total_expenses,
        children_income,
        leader_income,
        total_income,
        balance,
        expenses_children_must_cover,
        break_even_rate,
        status: BalanceStatus::from_balance(balance),
    }
}
