// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Node connection options

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public TRON networks with a default HTTP endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Mainnet,
    /// Shasta testnet
    Shasta,
    /// Nile testnet
    Nile,
}

impl Network {
    /// Default TronGrid endpoint for this network
    pub const fn default_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.trongrid.io",
            Network::Shasta => "https://api.shasta.trongrid.io",
            Network::Nile => "https://nile.trongrid.io",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Shasta => "shasta",
            Network::Nile => "nile",
        };
        f.write_str(name)
    }
}

/// Configuration for an [`HttpNodeClient`](crate::HttpNodeClient)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tron_trc20::NodeConfig;
///
/// let config = NodeConfig::mainnet()
///     .with_api_key("my-key")
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.url, "https://api.trongrid.io");
/// ```
///
/// The URL is validated when the client is built, not here.
#[derive(Clone)]
pub struct NodeConfig {
    /// Base URL of the node's HTTP API
    pub url: String,
    /// TronGrid API key, sent as the `TRON-PRO-API-KEY` header
    pub api_key: Option<String>,
    /// Request timeout duration
    pub timeout: Option<Duration>,
}

impl NodeConfig {
    /// Create a new node configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API key from an optional value
    #[must_use]
    pub fn with_api_key_opt(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Presets for the public networks
impl NodeConfig {
    /// Default endpoint of `network` with a 30 second timeout
    #[must_use]
    pub fn for_network(network: Network) -> Self {
        Self::new(network.default_url()).with_timeout(Duration::from_secs(30))
    }

    /// Mainnet preset
    #[must_use]
    pub fn mainnet() -> Self {
        Self::for_network(Network::Mainnet)
    }

    /// Shasta testnet preset
    #[must_use]
    pub fn shasta() -> Self {
        Self::for_network(Network::Shasta)
    }

    /// Nile testnet preset
    #[must_use]
    pub fn nile() -> Self {
        Self::for_network(Network::Nile)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::new("http://localhost:8090")
    }
}

// The API key stays out of logs
impl fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
