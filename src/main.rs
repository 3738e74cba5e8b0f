use anyhow::Result;
use clap::{Parser, Subcommand};

use scout_budget::cli::{
    handle_calc_command, handle_config_command, handle_template_command, CalcArgs,
    ConfigCommands, TemplateArgs,
};
use scout_budget::config::{BudgetPaths, Settings};
use scout_budget::display::format_field_list;

#[derive(Parser)]
#[command(
    name = "scout-budget",
    version,
    about = "Budget calculator for scout outings",
    long_about = "Works out the expenses, income and balance of a scout outing \
                  from head counts, transport, venue, food and material costs, \
                  and derives the day and overnight fees that break even."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the budget for an outing
    #[command(alias = "c")]
    Calc(CalcArgs),

    /// Print an input file template
    Template(TemplateArgs),

    /// List the editable fields
    Fields,

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    scout_budget::logging::init(cli.verbose);

    let paths = BudgetPaths::new()?;

    match cli.command {
        Some(Commands::Calc(args)) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_calc_command(&settings, args)?;
        }
        Some(Commands::Template(args)) => {
            handle_template_command(args)?;
        }
        Some(Commands::Fields) => {
            println!("{}", format_field_list());
        }
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, command.unwrap_or(ConfigCommands::Show))?;
        }
        None => {
            println!("scout-budget - Budget calculator for scout outings");
            println!();
            println!("Run 'scout-budget --help' for usage information.");
            println!("Run 'scout-budget template --example > outing.json' to start an input file.");
        }
    }

    Ok(())
}
