//! Display formatting for terminal output
//!
//! Renders budget reports and field listings as tables.

pub mod report;

pub use report::{format_budget_report, format_field_list, format_money_colored};
