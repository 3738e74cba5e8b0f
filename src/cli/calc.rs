//! The `calc` command
//!
//! Builds a budget model from an optional input file, named flags and
//! `--set field=value` edits, optionally applies break-even fees, and
//! prints the resulting report.

use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{info, warn};

use crate::config::{OutputFormat, Settings};
use crate::display::format_budget_report;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml, BudgetReport};
use crate::models::{BudgetInput, FieldId, FieldValue, Money};
use crate::services::BudgetModel;

/// Arguments for `calc`
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Start from an input file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Children taking part in total
    #[arg(long, allow_negative_numbers = true)]
    pub total_children: Option<i64>,

    /// Children staying overnight
    #[arg(long, allow_negative_numbers = true)]
    pub overnight_children: Option<i64>,

    /// Transport cost per child (e.g. "5" or "4.50")
    ///
    /// Named amount flags reject text that is not an amount; `--set` reads
    /// the same text as 0.
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub transport_per_child: Option<Money>,

    /// Transport cost per leader
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub transport_per_leader: Option<Money>,

    /// Number of leaders
    #[arg(long, allow_negative_numbers = true)]
    pub leaders: Option<i64>,

    /// Venue fee
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub venue_fee: Option<Money>,

    /// Food cost
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub food: Option<Money>,

    /// Materials and activities cost
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub materials: Option<Money>,

    /// Fee per day-only child
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub day_rate: Option<Money>,

    /// Fee per overnight child
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub overnight_rate: Option<Money>,

    /// Leaders pay a contribution (out of pocket or from the treasury)
    #[arg(long, conflicts_with = "spread")]
    pub treasury: bool,

    /// Spread leader costs across the children's fees
    #[arg(long)]
    pub spread: bool,

    /// Contribution per leader when treasury funded
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub leader_contribution: Option<Money>,

    /// Edit a field by name, e.g. `--set venue-fee=50`
    ///
    /// Values are read like a form input: unreadable text becomes 0 (or
    /// false), where the named flags would reject it.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub edits: Vec<String>,

    /// Replace both fees with break-even fees before reporting
    #[arg(short, long)]
    pub break_even: bool,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored amounts in table output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Parse a `field=value` edit
///
/// The field name must be known; the value is read leniently.
pub fn parse_edit(edit: &str) -> BudgetResult<(FieldId, FieldValue)> {
    let (name, raw) = edit.split_once('=').ok_or_else(|| {
        BudgetError::Validation(format!("Expected FIELD=VALUE, got '{}'", edit))
    })?;

    let field: FieldId = name.parse()?;
    Ok((field, FieldValue::parse_lenient(field, raw)))
}

/// Load an input record from a JSON or YAML file
pub fn load_input(path: &Path) -> BudgetResult<BudgetInput> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    let input = if is_yaml {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    info!(path = %path.display(), "loaded budget input");
    Ok(input)
}

/// Apply the input file, named flags, edits and break-even option in that order
pub fn build_model(args: &CalcArgs) -> BudgetResult<BudgetModel> {
    let mut model = match &args.input {
        Some(path) => BudgetModel::from_input(load_input(path)?),
        None => BudgetModel::new(),
    };

    let counts = [
        (FieldId::TotalChildren, args.total_children),
        (FieldId::OvernightChildren, args.overnight_children),
        (FieldId::LeaderCount, args.leaders),
    ];
    for (field, value) in counts {
        if let Some(n) = value {
            model.set_field(field, FieldValue::Count(n));
        }
    }

    let amounts = [
        (FieldId::TransportCostPerChild, args.transport_per_child),
        (FieldId::TransportCostPerLeader, args.transport_per_leader),
        (FieldId::VenueFee, args.venue_fee),
        (FieldId::FoodCost, args.food),
        (FieldId::MaterialsCost, args.materials),
        (FieldId::DayRate, args.day_rate),
        (FieldId::OvernightRate, args.overnight_rate),
        (FieldId::LeaderContribution, args.leader_contribution),
    ];
    for (field, value) in amounts {
        if let Some(amount) = value {
            model.set_field(field, FieldValue::Money(amount));
        }
    }

    if args.treasury {
        model.set_field(FieldId::LeadersPayFromTreasury, FieldValue::Flag(true));
    } else if args.spread {
        model.set_field(FieldId::LeadersPayFromTreasury, FieldValue::Flag(false));
    }

    for edit in &args.edits {
        let (field, value) = parse_edit(edit)?;
        model.set_field(field, value);
    }

    if args.break_even {
        model.apply_break_even_rates();
    }

    Ok(model)
}

/// Write a report in the chosen format
pub fn write_report<W: Write>(
    report: &BudgetReport,
    settings: &Settings,
    format: OutputFormat,
    color: bool,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        OutputFormat::Table => {
            let text = format_budget_report(report, settings, color);
            writer
                .write_all(text.as_bytes())
                .map_err(|e| BudgetError::Export(e.to_string()))
        }
        OutputFormat::Json => export_report_json(report, writer),
        OutputFormat::Yaml => export_report_yaml(report, writer),
        OutputFormat::Csv => export_report_csv(report, writer),
    }
}

/// Handle the `calc` command
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> BudgetResult<()> {
    let model = build_model(&args)?;
    let report = BudgetReport::from_model(&model);

    if model.input().has_inconsistent_counts() {
        warn!(
            total = model.input().total_children,
            overnight = model.input().overnight_children,
            "more overnight children than children in total"
        );
    }

    let format = args.format.unwrap_or(settings.default_format);

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                BudgetError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_report(&report, settings, format, false, &mut file)?;
            info!(path = %path.display(), %format, "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let color = !args.no_color && stdout.is_terminal();
            let mut handle = stdout.lock();
            write_report(&report, settings, format, color, &mut handle)?;
        }
    }

    Ok(())
}
