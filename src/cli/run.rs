use super::{
    args::{Arguments, Command},
    commands::{CommandResult, dead_code::dead_code, init::init, inventory::inventory},
};
use anyhow::Result;

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Inventory(cmd)) => inventory(cmd),
        Some(Command::DeadCode(cmd)) => dead_code(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
