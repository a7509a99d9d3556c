// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token identity type

use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use crate::TronAddress;

/// A TRC20 token: its contract address and decimal precision
///
/// Supplied when a [`TokenClient`](crate::TokenClient) is built and fixed for
/// the client's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenDescriptor {
    contract: TronAddress,
    decimals: TokenDecimals,
}

impl TokenDescriptor {
    /// Create a new descriptor
    pub const fn new(contract: TronAddress, decimals: TokenDecimals) -> Self {
        Self { contract, decimals }
    }

    /// Token contract address
    pub const fn contract(&self) -> &TronAddress {
        &self.contract
    }

    /// Token decimal precision
    pub const fn decimals(&self) -> TokenDecimals {
        self.decimals
    }
}

impl std::fmt::Display for TokenDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.contract, self.decimals)
    }
}
