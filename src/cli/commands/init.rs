use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let summary = if config_path.exists() {
        InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        }
    } else {
        fs::write(&config_path, default_config_json()?)?;
        InitSummary {
            created: true,
            error: None,
        }
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(summary),
    })
}
