//! Confab - consul agent wrapper configuration
//!
//! Confab supervises a consul agent inside a node deployment; this crate
//! holds the configuration side of that system: the nested schema
//! describing the node, its filesystem layout, the agent behavior, and the
//! wrapper timeout, together with the loader that overlays an
//! operator-supplied JSON document onto the built-in defaults.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration schema and its defaults
//! - **Infrastructure Layer** (`infrastructure`): JSON decoding onto the defaults
//! - **CLI Layer** (`cli`): the `check`/`defaults` command surface
//!
//! # Example
//!
//! ```
//! use confab::ConfigLoader;
//!
//! let config = ConfigLoader::from_json(br#"{"node": {"name": "consul-z1-0"}}"#)?;
//! assert_eq!(config.node.name, "consul-z1-0");
//! assert_eq!(config.confab.timeout_in_seconds, 55);
//! # Ok::<(), confab::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    AgentConfig, ConfabConfig, Config, ConsulConfig, DnsConfig, NodeConfig, PathConfig,
    ServersConfig, ServiceDefinition,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
