//! Business logic layer
//!
//! The budget model is the only service: it owns the input record and
//! derives every figure from it.

pub mod budget;

pub use budget::{calculate, overnight_premium, BudgetModel};
