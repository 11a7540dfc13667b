//! Domain layer for the confab configuration system
//!
//! This module contains the configuration schema and its default values.

pub mod models;
