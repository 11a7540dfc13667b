use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level configuration for the consul agent wrapper.
///
/// Every field at every nesting level carries a serde default, so decoding
/// a JSON document overlays the supplied fields onto [`Config::default`]
/// one leaf at a time: a partially populated nested object merges
/// field-by-field instead of replacing the whole subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Identity of the local node.
    #[serde(default)]
    pub node: NodeConfig,

    /// Filesystem layout of the deployment.
    #[serde(default)]
    pub path: PathConfig,

    /// Consul agent behavior.
    #[serde(default)]
    pub consul: ConsulConfig,

    /// Wrapper-process settings.
    #[serde(default)]
    pub confab: ConfabConfig,
}

/// Identity of the node this agent runs on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NodeConfig {
    /// Node name as registered with the cluster.
    #[serde(default)]
    pub name: String,

    /// Instance index of the node within the deployment.
    #[serde(default)]
    pub index: u64,

    /// Externally reachable IP address of the node.
    #[serde(default)]
    pub external_ip: String,
}

/// Filesystem locations used by the wrapper and the agent it manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathConfig {
    /// Path to the consul agent binary.
    #[serde(default = "default_agent_path")]
    pub agent_path: String,

    /// Directory the rendered agent configuration is read from.
    #[serde(default = "default_consul_config_dir")]
    pub consul_config_dir: String,

    /// PID file written for the supervised agent process.
    #[serde(default = "default_pid_file")]
    pub pid_file: String,

    /// Serf keyring location.
    #[serde(default = "default_keyring_file")]
    pub keyring_file: String,

    /// Agent data directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_agent_path() -> String {
    "/var/vcap/packages/consul/bin/consul".to_string()
}

fn default_consul_config_dir() -> String {
    "/var/vcap/jobs/consul_agent/config".to_string()
}

fn default_pid_file() -> String {
    "/var/vcap/sys/run/consul_agent/consul_agent.pid".to_string()
}

fn default_keyring_file() -> String {
    "/var/vcap/store/consul_agent/serf/local.keyring".to_string()
}

fn default_data_dir() -> String {
    "/var/vcap/store/consul_agent".to_string()
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            agent_path: default_agent_path(),
            consul_config_dir: default_consul_config_dir(),
            pid_file: default_pid_file(),
            keyring_file: default_keyring_file(),
            data_dir: default_data_dir(),
        }
    }
}

/// Consul-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConsulConfig {
    /// Agent behavior configuration.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Gossip encryption keys.
    #[serde(default, deserialize_with = "default_on_null")]
    pub encrypt_keys: Vec<String>,
}

/// Behavior of the managed consul agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AgentConfig {
    /// Services registered with the agent, keyed by service name.
    #[serde(default)]
    pub services: HashMap<String, ServiceDefinition>,

    /// Agent mode string, passed through as-is.
    #[serde(default)]
    pub mode: String,

    /// Datacenter the agent joins.
    #[serde(default)]
    pub datacenter: String,

    /// Agent log level, passed through as-is.
    #[serde(default)]
    pub log_level: String,

    /// Consul protocol version.
    #[serde(default)]
    pub protocol_version: u64,

    /// Cluster members to join.
    #[serde(default)]
    pub servers: ServersConfig,

    /// DNS endpoint behavior.
    #[serde(default)]
    pub dns_config: DnsConfig,
}

/// Server addresses the agent joins, split by network scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServersConfig {
    /// LAN members, in join order.
    #[serde(default, deserialize_with = "default_on_null")]
    pub lan: Vec<String>,

    /// WAN members, in join order.
    #[serde(default, deserialize_with = "default_on_null")]
    pub wan: Vec<String>,
}

/// DNS endpoint settings for the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DnsConfig {
    /// Whether DNS queries may be served by non-leader nodes.
    #[serde(default)]
    pub allow_stale: bool,

    /// Maximum staleness tolerated for stale reads, as a duration string.
    #[serde(default = "default_max_stale")]
    pub max_stale: String,
}

fn default_max_stale() -> String {
    "5s".to_string()
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            allow_stale: false,
            max_stale: default_max_stale(),
        }
    }
}

/// A service registered with the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceDefinition {
    /// Name the service is advertised under.
    #[serde(default)]
    pub name: String,
}

/// Settings for the wrapper process itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfabConfig {
    /// Seconds the wrapper waits for the agent to come up before giving up.
    #[serde(default = "default_timeout_in_seconds")]
    pub timeout_in_seconds: u64,
}

const fn default_timeout_in_seconds() -> u64 {
    55
}

impl Default for ConfabConfig {
    fn default() -> Self {
        Self {
            timeout_in_seconds: default_timeout_in_seconds(),
        }
    }
}

/// Decodes a JSON `null` as the field's default value. Keeps the server
/// lists and key list as empty sequences when a document spells absence
/// as an explicit `null`.
fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
