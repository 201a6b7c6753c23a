//! Bridge connection settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::protocol::DEFAULT_PORT;
use crate::transport::{Transport, PACKET_INTERVAL};
use crate::{error::MilightError, Result};

/// Where the bridge lives and how fast to talk to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Host name or IP of the bridge, optionally with `:port`
    pub host: String,
    /// Used when `host` carries no port
    pub port: u16,
    /// Gap before every packet after the first
    pub packet_interval_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            packet_interval_ms: PACKET_INTERVAL.as_millis() as u64,
        }
    }
}

impl BridgeConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// `host:port` string for the transport
    pub fn address(&self) -> Result<String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(MilightError::InvalidConfig("bridge host is empty".to_string()));
        }
        if self.port == 0 {
            return Err(MilightError::InvalidConfig("bridge port must not be 0".to_string()));
        }

        if has_port(host) {
            Ok(host.to_string())
        } else if host.contains(':') {
            // Bare IPv6 literal
            Ok(format!("[{}]:{}", host.trim_matches(|c| c == '[' || c == ']'), self.port))
        } else {
            Ok(format!("{}:{}", host, self.port))
        }
    }

    pub fn packet_interval(&self) -> Duration {
        Duration::from_millis(self.packet_interval_ms)
    }

    /// Transport paced at the configured interval
    pub fn transport(&self) -> Transport {
        Transport::with_interval(self.packet_interval())
    }
}

/// `name:port` or `[v6]:port`
fn has_port(host: &str) -> bool {
    if let Some(rest) = host.strip_prefix('[') {
        return rest
            .split_once("]:")
            .is_some_and(|(_, port)| port.parse::<u16>().is_ok());
    }
    match host.split_once(':') {
        Some((_, port)) => !port.contains(':') && port.parse::<u16>().is_ok(),
        None => false,
    }
}
