use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let summary = init_in(Path::new("."))?;
    Ok(finish(CommandSummary::Init(summary), Vec::new(), 0, 0, true))
}

/// Write the default config file into `dir` unless one already exists.
pub fn init_in(dir: &Path) -> Result<InitSummary> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        });
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(InitSummary {
        created: true,
        error: None,
    })
}
