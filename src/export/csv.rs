//! CSV export of a budget report
//!
//! The report is flattened to `metric,value` rows: inputs first, in form
//! order, then the derived figures.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetReport;
use crate::models::FieldId;

/// Write the report as two-column CSV
pub fn export_report_csv<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["metric", "value"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for field in FieldId::ALL {
        let value = report.input.get(field).to_string();
        csv_writer
            .write_record([field.name(), value.as_str()])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    let output = &report.output;
    let rows = [
        ("day-children", output.day_children.to_string()),
        ("total-expenses", output.total_expenses.to_string()),
        ("children-income", output.children_income.to_string()),
        ("leader-income", output.leader_income.to_string()),
        ("total-income", output.total_income.to_string()),
        ("balance", output.balance.to_string()),
        (
            "expenses-children-must-cover",
            output.expenses_children_must_cover.to_string(),
        ),
        ("break-even-rate", output.break_even_rate.to_string()),
        ("status", output.status.to_string()),
    ];

    for (metric, value) in &rows {
        csv_writer
            .write_record([*metric, value.as_str()])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
