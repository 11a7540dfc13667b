//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Dual-mode command result: renders for humans or as machine JSON.
pub trait CommandOutput: Serialize {
    /// Human-readable rendering printed in the default mode.
    fn to_human(&self) -> String;

    /// Machine-readable rendering printed under `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the requested mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}
