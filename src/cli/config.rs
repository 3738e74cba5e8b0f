//! Config CLI commands

use clap::Subcommand;

use crate::config::{BudgetPaths, OutputFormat, Settings};
use crate::error::BudgetResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved paths and current settings
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Change one or more settings
    Set {
        /// Currency symbol shown in tables (empty for none)
        #[arg(long)]
        currency: Option<String>,

        /// Default report format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Show hints under the report table
        #[arg(long)]
        hints: Option<bool>,
    },
}

/// Handle a config command
///
/// Settings are read only by the commands that need them, so `init --force`
/// can replace a settings file that no longer parses.
pub fn handle_config_command(paths: &BudgetPaths, cmd: ConfigCommands) -> BudgetResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let settings = Settings::load_or_create(paths)?;
            println!("Scout Budget Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not written yet)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default format:  {}", settings.default_format);
            println!("  Show hints:      {}", settings.show_hints);
        }
        ConfigCommands::Init { force } => {
            if paths.is_initialized() && !force {
                println!(
                    "Settings already exist at {} (use --force to overwrite)",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            Settings::default().save(paths)?;
            println!("Wrote default settings to {}", paths.settings_file().display());
        }
        ConfigCommands::Set {
            currency,
            format,
            hints,
        } => {
            let mut updated = Settings::load_or_create(paths)?;
            if let Some(currency) = currency {
                updated.currency_symbol = currency;
            }
            if let Some(format) = format {
                updated.default_format = format;
            }
            if let Some(hints) = hints {
                updated.show_hints = hints;
            }
            updated.save(paths)?;
            println!("Settings saved to {}", paths.settings_file().display());
        }
    }

    Ok(())
}
