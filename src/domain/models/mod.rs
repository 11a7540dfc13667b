//! Domain model types.

pub mod config;

pub use config::{
    AgentConfig, ConfabConfig, Config, ConsulConfig, DnsConfig, NodeConfig, PathConfig,
    ServersConfig, ServiceDefinition,
};
