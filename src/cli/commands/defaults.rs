//! Implementation of the `confab defaults` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::Config;

/// The built-in default configuration.
#[derive(Debug, Serialize)]
pub struct DefaultsOutput {
    pub config: Config,
}

impl CommandOutput for DefaultsOutput {
    fn to_human(&self) -> String {
        serde_json::to_string_pretty(&self.config).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

/// Print the configuration used when no document is supplied.
pub fn execute(json_mode: bool) -> Result<()> {
    output(
        &DefaultsOutput {
            config: Config::default(),
        },
        json_mode,
    );
    Ok(())
}
