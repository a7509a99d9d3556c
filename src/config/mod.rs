// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for token clients
//!
//! A [`TokenConfig`] is the loosely-typed form of a token descriptor, as it
//! arrives from a config file or environment. Both fields are optional at the
//! type level so that a missing value is reported as a
//! [`ConfigurationError`] rather than a deserialization failure.
//!
//! # Example
//!
//! ```rust
//! use tron_trc20::{TokenConfig, TokenDescriptor};
//!
//! let config: TokenConfig = serde_json::from_str(
//!     r#"{ "contract_address": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", "decimals": 6 }"#,
//! ).unwrap();
//!
//! let token = TokenDescriptor::try_from(&config).unwrap();
//! assert_eq!(token.decimals().as_u8(), 6);
//! ```
//!
//! Node endpoints are configured separately through
//! [`NodeConfig`](crate::NodeConfig).

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;
use crate::types::tokens::{TokenDecimals, TokenDescriptor};
use crate::TronAddress;

pub mod constants;

/// Token configuration as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token contract address, Base58 or hex form
    #[serde(default)]
    pub contract_address: Option<String>,

    /// Token decimal precision
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl TokenConfig {
    /// Create a config with both fields set
    pub fn new(contract_address: impl Into<String>, decimals: u8) -> Self {
        Self {
            contract_address: Some(contract_address.into()),
            decimals: Some(decimals),
        }
    }

    /// Mainnet USDT
    pub fn usdt() -> Self {
        Self::new(constants::tokens::USDT_MAINNET, constants::tokens::USDT_DECIMALS)
    }
}

impl TryFrom<&TokenConfig> for TokenDescriptor {
    type Error = ConfigurationError;

    fn try_from(config: &TokenConfig) -> Result<Self, Self::Error> {
        let raw_address = config
            .contract_address
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingContractAddress)?;

        let decimals = config
            .decimals
            .map(TokenDecimals::new)
            .ok_or(ConfigurationError::MissingDecimals)?;

        let contract = raw_address.parse::<TronAddress>().map_err(|source| {
            ConfigurationError::InvalidContractAddress {
                address: raw_address.to_string(),
                source,
            }
        })?;

        Ok(TokenDescriptor::new(contract, decimals))
    }
}
