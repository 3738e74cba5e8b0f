//! JSON export of a budget report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetInput, BudgetOutput};
use crate::services::BudgetModel;

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of a model: what was entered and what follows from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub app_version: String,
    pub input: BudgetInput,
    pub output: BudgetOutput,

    /// Warnings about the input, e.g. inconsistent head counts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl BudgetReport {
    /// Build a report from the model's current state
    pub fn from_model(model: &BudgetModel) -> Self {
        let input = model.input().clone();
        let output = model.outputs();

        let mut notes = Vec::new();
        if input.has_inconsistent_counts() {
            notes.push(format!(
                "{} children stay overnight but only {} take part; day-only children is {}",
                input.overnight_children, input.total_children, output.day_children
            ));
        }

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            input,
            output,
            notes,
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldId, FieldValue, Money};

    fn sample_model() -> BudgetModel {
        let mut model = BudgetModel::new();
        model.set_field(FieldId::TotalChildren, FieldValue::Count(10));
        model.set_field(FieldId::OvernightChildren, FieldValue::Count(4));
        model.set_field(FieldId::FoodCost, Money::from_cents(10000).into());
        model
    }

    #[test]
    fn test_export_contains_figures() {
        let report = BudgetReport::from_model(&sample_model());
        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], REPORT_SCHEMA_VERSION);
        assert_eq!(value["input"]["total_children"], 10);
        assert_eq!(value["output"]["day_children"], 6);
        assert_eq!(value["output"]["total_expenses"], "100.00");
        assert_eq!(value["output"]["status"], "deficit");
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_inconsistent_counts_add_note() {
        let mut model = sample_model();
        model.set_field(FieldId::OvernightChildren, FieldValue::Count(12));

        let report = BudgetReport::from_model(&model);
        assert_eq!(report.notes.len(), 1);
        assert!(report.notes[0].contains("day-only children is -2"));
    }

    #[test]
    fn test_report_reads_back() {
        let report = BudgetReport::from_model(&sample_model());
        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();

        let parsed: BudgetReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.input, report.input);
        assert_eq!(parsed.output, report.output);
    }
}
