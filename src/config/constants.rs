// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! This module centralizes magic constants and well-known token contracts
//! used throughout the crate.

pub use crate::types::address::ADDRESS_PREFIX;

/// Fee limit attached to TRC20 transfers, in sun (100 TRX)
pub const DEFAULT_FEE_LIMIT: u64 = 100_000_000;

/// Decimal precision of the native coin (1 TRX = 1,000,000 sun)
pub const TRX_DECIMALS: u8 = 6;

/// Fractional digits kept when converting sun to a display value
pub const NATIVE_DISPLAY_SCALE: i64 = 8;

/// Well-known TRC20 token contracts
pub mod tokens {
    /// Tether USD (USDT) on TRON mainnet
    ///
    /// Contract: TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t
    pub const USDT_MAINNET: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

    /// USDT decimals
    pub const USDT_DECIMALS: u8 = 6;
}
