//! YAML export of a budget report

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetReport;

/// Write the report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "# Scout outing budget report")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", report.generated_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", report.app_version)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
