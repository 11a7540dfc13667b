//! Configuration loading infrastructure
//!
//! Defaults-then-overlay decoding of operator JSON:
//! - Hard-coded default values
//! - Structural merge of supplied fields onto the defaults
//! - Type-safe config structs

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
