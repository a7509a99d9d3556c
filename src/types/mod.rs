// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across the crate.
//!
//! This module provides value types for the chain's domain concepts:
//! - Addresses (21-byte, hex and Base58Check forms)
//! - Token identity and decimals
//! - Transactions across build, sign and broadcast

pub mod address;
pub mod tokens;
pub mod transaction;

// Note: Public types are re-exported from lib.rs, not here
