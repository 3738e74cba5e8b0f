//! Budget report formatting for terminal output

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::export::BudgetReport;
use crate::models::{BalanceStatus, FieldId, Money};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ReportRow {
    fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
        }
    }

    fn blank() -> Self {
        Self::new("", "")
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Description")]
    label: &'static str,
}

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, prefix: &str) -> String {
    let text = amount.format_with_symbol(prefix);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Render the full report as a table followed by hints
pub fn format_budget_report(report: &BudgetReport, settings: &Settings, color: bool) -> String {
    let prefix = settings.money_prefix();
    let money = |amount: Money| amount.format_with_symbol(&prefix);
    let input = &report.input;
    let output = &report.output;

    let mut rows = vec![
        ReportRow::new("Children", input.total_children.to_string()),
        ReportRow::new("  staying overnight", input.overnight_children.to_string()),
        ReportRow::new("  day only", output.day_children.to_string()),
        ReportRow::new("Leaders", input.leader_count.to_string()),
        ReportRow::blank(),
        ReportRow::new(
            "Transport children",
            money(input.transport_cost_per_child.times(input.total_children)),
        ),
        ReportRow::new(
            "Transport leaders",
            money(input.transport_cost_per_leader.times(input.leader_count)),
        ),
        ReportRow::new(FieldId::VenueFee.label(), money(input.venue_fee)),
        ReportRow::new(FieldId::FoodCost.label(), money(input.food_cost)),
        ReportRow::new(FieldId::MaterialsCost.label(), money(input.materials_cost)),
        ReportRow::new("Total expenses", money(output.total_expenses)),
        ReportRow::blank(),
        ReportRow::new(
            format!("Day-only fees ({} each)", money(input.day_rate)),
            money(input.day_rate.times(output.day_children)),
        ),
        ReportRow::new(
            format!("Overnight fees ({} each)", money(input.overnight_rate)),
            money(input.overnight_rate.times(input.overnight_children)),
        ),
    ];

    if input.leader_policy.is_treasury_funded() {
        rows.push(ReportRow::new(
            format!("Leader contributions ({} each)", money(input.leader_contribution)),
            money(output.leader_income),
        ));
    }

    rows.push(ReportRow::new("Total income", money(output.total_income)));
    rows.push(ReportRow::blank());

    let balance = if color {
        format_money_colored(output.balance, &prefix)
    } else {
        money(output.balance)
    };
    rows.push(ReportRow::new("Balance", balance));
    rows.push(ReportRow::new(
        "Break-even rate per child",
        output.break_even_rate.display_amount().format_with_symbol(&prefix),
    ));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    let mut out = table.to_string();
    out.push('\n');

    if output.status == BalanceStatus::Surplus {
        out.push_str(&format!("\n  *** {} ***\n", output.status));
    }

    if settings.show_hints {
        out.push_str(&format!("\nLeaders: {}\n", input.leader_policy.hint()));
    }

    for note in &report.notes {
        out.push_str(&format!("Warning: {}\n", note));
    }

    out
}

/// List every editable field with its kind and label
pub fn format_field_list() -> String {
    let rows: Vec<FieldRow> = FieldId::ALL
        .iter()
        .map(|field| FieldRow {
            name: field.name(),
            kind: field.kind().to_string(),
            label: field.label(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}
