//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `inventory`: Write the module inventory report (dependencies, components, endpoints, tables)
//! - `dead-code`: Write the dead-code report (unused imports and methods) for a tagged run
//! - `init`: Initialize sprout configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Inventory(cmd)) => cmd.args.verbose,
            Some(Command::DeadCode(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the report commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Report file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InventoryCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DeadCodeCommand {
    /// Tag identifying this analysis run (branch, release, ticket)
    pub tag: String,

    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inventory dependencies, components, endpoints and tables into a text report
    Inventory(InventoryCommand),
    /// Report classes with unused imports or unused methods as markdown
    DeadCode(DeadCodeCommand),
    /// Initialize a new .sproutrc.json configuration file
    Init,
}
