use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The supplied document was not syntactically valid JSON.
    #[error("invalid character in config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Decodes operator-supplied JSON on top of the built-in defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Overlay a raw JSON document onto [`Config::default`].
    ///
    /// Fields present in the document replace their default; fields absent
    /// at any nesting level keep it, so a partially populated nested object
    /// merges field-by-field rather than replacing the whole subtree.
    ///
    /// The only failure mode is malformed JSON. Unknown keys are ignored
    /// and field values are passed through without validation.
    pub fn from_json(raw: &[u8]) -> Result<Config, ConfigError> {
        let config = serde_json::from_slice(raw)?;
        Ok(config)
    }
}
