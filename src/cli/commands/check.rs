//! Implementation of the `confab check` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::Config;
use crate::infrastructure::config::ConfigLoader;

/// Arguments for `confab check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON configuration file to resolve against the defaults
    #[arg(long, short)]
    pub config_file: PathBuf,
}

/// Effective configuration resolved from a file.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub config_file: PathBuf,
    pub config: Config,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let lines = vec![
            format!("Resolved configuration from {}", self.config_file.display()),
            format!("  node name:        {}", config.node.name),
            format!("  node index:       {}", config.node.index),
            format!("  datacenter:       {}", config.consul.agent.datacenter),
            format!("  mode:             {}", config.consul.agent.mode),
            format!("  lan servers:      {}", config.consul.agent.servers.lan.len()),
            format!("  wan servers:      {}", config.consul.agent.servers.wan.len()),
            format!("  services:         {}", config.consul.agent.services.len()),
            format!("  agent binary:     {}", config.path.agent_path),
            format!("  data dir:         {}", config.path.data_dir),
            format!("  startup timeout:  {}s", config.confab.timeout_in_seconds),
        ];
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Read a JSON config file and print the configuration it resolves to.
pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let raw = fs::read(&args.config_file)
        .with_context(|| format!("failed to read {}", args.config_file.display()))?;

    tracing::debug!(
        config_file = %args.config_file.display(),
        bytes = raw.len(),
        "resolving configuration"
    );

    let config = ConfigLoader::from_json(&raw)
        .with_context(|| format!("failed to resolve {}", args.config_file.display()))?;

    output(
        &CheckOutput {
            config_file: args.config_file,
            config,
        },
        json_mode,
    );
    Ok(())
}
