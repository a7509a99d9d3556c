// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! # Type Relationships
//!
//! ```text
//! BigInt (minimum units, on-chain)
//!     |
//!     | amount::to_display_amount(TokenDecimals)
//!     ↓
//! BigDecimal (display amount, exact)
//! ```

mod decimals;
mod descriptor;

pub use decimals::TokenDecimals;
pub use descriptor::TokenDescriptor;
