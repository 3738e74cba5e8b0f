//! The `template` command
//!
//! Prints an input record to start an input file from.

use std::io::Write;

use clap::{Args, ValueEnum};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetInput, FieldId, FieldValue, Money};
use crate::services::BudgetModel;

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TemplateFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for `template`
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// File format of the template
    #[arg(short, long, value_enum, default_value_t = TemplateFormat::Json)]
    pub format: TemplateFormat,

    /// Fill in a worked example instead of zeros
    #[arg(long)]
    pub example: bool,
}

/// A weekend outing: ten children, four of them overnight, two leaders
pub fn example_input() -> BudgetInput {
    let mut model = BudgetModel::new();
    model.set_field(FieldId::TotalChildren, FieldValue::Count(10));
    model.set_field(FieldId::OvernightChildren, FieldValue::Count(4));
    model.set_field(FieldId::TransportCostPerChild, Money::from_cents(500).into());
    model.set_field(FieldId::TransportCostPerLeader, Money::from_cents(800).into());
    model.set_field(FieldId::LeaderCount, FieldValue::Count(2));
    model.set_field(FieldId::VenueFee, Money::from_cents(5000).into());
    model.set_field(FieldId::FoodCost, Money::from_cents(10000).into());
    model.set_field(FieldId::MaterialsCost, Money::from_cents(2000).into());
    model.into_input()
}

/// Write the template to `writer`
pub fn write_template<W: Write>(args: &TemplateArgs, writer: &mut W) -> BudgetResult<()> {
    let input = if args.example {
        example_input()
    } else {
        BudgetInput::default()
    };

    match args.format {
        TemplateFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &input)?;
            writeln!(writer)?;
        }
        TemplateFormat::Yaml => {
            serde_yaml::to_writer(&mut *writer, &input)?;
        }
    }

    writer.flush().map_err(|e| BudgetError::Io(e.to_string()))
}

/// Handle the `template` command
pub fn handle_template_command(args: TemplateArgs) -> BudgetResult<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_template(&args, &mut handle)
}
