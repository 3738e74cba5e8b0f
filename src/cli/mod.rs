//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget model.

pub mod calc;
pub mod config;
pub mod template;

pub use calc::{handle_calc_command, CalcArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use template::{handle_template_command, TemplateArgs, TemplateFormat};
