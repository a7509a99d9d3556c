// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CodecError;

/// TRC20 token decimal precision
///
/// Represents the number of decimal places for a token: the display amount is
/// `min_units / 10^decimals`. Common values:
/// - TRX (native coin): 6 decimals
/// - USDT on TRON: 6 decimals
/// - Most other TRC20 tokens: 18 decimals
///
/// Zero is a legitimate precision (an indivisible token).
///
/// # Examples
///
/// ```
/// use tron_trc20::TokenDecimals;
///
/// let decimals: TokenDecimals = "6".parse().unwrap();
/// assert_eq!(decimals, TokenDecimals::TRX);
/// assert!("six".parse::<TokenDecimals>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Native coin precision (1 TRX = 10^6 sun)
    pub const TRX: Self = Self(6);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl FromStr for TokenDecimals {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| CodecError::InvalidDecimals {
                input: s.to_string(),
            })
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
