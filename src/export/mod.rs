//! Report export
//!
//! Writes a budget report (inputs plus every derived figure) in machine
//! readable formats:
//! - JSON: full report with schema version
//! - YAML: the same report with a header comment
//! - CSV: one `metric,value` row per figure

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, BudgetReport, REPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
