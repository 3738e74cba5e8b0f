//! Scout budget calculator
//!
//! Works out what a scout outing costs, what the fees bring in, and which
//! fees would make the outing break even. The whole calculation is a pure
//! function of one small input record; everything else in this crate is the
//! command-line surface around it.
//!
//! # Architecture
//!
//! - `models`: money amounts, editable fields, input record and derived figures
//! - `services`: the budget model and its formulas
//! - `display`: terminal report tables
//! - `export`: JSON, YAML and CSV report writers
//! - `config`: config directory and user settings
//! - `cli`: clap command handlers
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use scout_budget::models::{FieldId, FieldValue, Money};
//! use scout_budget::services::BudgetModel;
//!
//! let mut model = BudgetModel::new();
//! model.set_field(FieldId::TotalChildren, FieldValue::Count(10));
//! model.set_field(FieldId::FoodCost, FieldValue::Money(Money::from_cents(10_000)));
//! model.apply_break_even_rates();
//!
//! assert_eq!(model.input().day_rate, Money::from_cents(1_000));
//! assert!(!model.outputs().balance.is_negative());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
pub use services::BudgetModel;
