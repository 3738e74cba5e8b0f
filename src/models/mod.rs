//! Core data models for the scout budget calculator
//!
//! This module contains the data structures of the budgeting domain: money
//! amounts, editable fields, the input record and the derived figures.

pub mod field;
pub mod input;
pub mod money;
pub mod output;

pub use field::{FieldId, FieldKind, FieldValue};
pub use input::{BudgetInput, LeaderPolicy};
pub use money::{Money, MoneyParseError};
pub use output::{BalanceStatus, BreakEvenRate, BudgetOutput};
