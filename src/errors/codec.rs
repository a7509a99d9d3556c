// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for address, hex and amount conversions.
//!
//! Every conversion in [`crate::codec`], [`crate::amount`] and [`crate::abi`]
//! reports malformed input through [`CodecError`]. These are local computation
//! failures: the client wraps them into its own error kinds before they reach
//! callers of [`TokenClient`](crate::TokenClient).

use alloy_primitives::hex::FromHexError;

/// Errors raised by the pure conversion functions.
///
/// # Examples
///
/// ```rust
/// use tron_trc20::{codec, CodecError};
///
/// match codec::hex_to_address("abc") {
///     Err(CodecError::OddLengthHex { len }) => assert_eq!(len, 3),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Input is not valid hexadecimal.
    #[error("Invalid hex string '{input}': {source}")]
    InvalidHex {
        /// The offending input
        input: String,
        /// The underlying hex decoding error
        #[source]
        source: FromHexError,
    },

    /// Hex input has an odd number of characters.
    #[error("Hex string has odd length {len}")]
    OddLengthHex {
        /// Length of the rejected input
        len: usize,
    },

    /// Hex input is empty.
    #[error("Hex string is empty")]
    EmptyHex,

    /// Input is not a valid Base58Check string (bad alphabet or checksum).
    #[error("Invalid Base58Check string '{input}': {details}")]
    InvalidBase58 {
        /// The offending input
        input: String,
        /// Details from the Base58 decoder
        details: String,
    },

    /// Decoded bytes do not form a valid address (length or prefix).
    #[error("Invalid address: {details}")]
    InvalidAddress {
        /// Why the address was rejected
        details: String,
    },

    /// Decoded bytes are not valid UTF-8.
    #[error("Hex payload is not valid UTF-8")]
    InvalidUtf8,

    /// Input is not a decimal numeral.
    #[error("Invalid numeral '{input}'")]
    InvalidNumeral {
        /// The offending input
        input: String,
    },

    /// A value that must be non-negative was negative.
    #[error("Value must be non-negative, got {value}")]
    NegativeValue {
        /// The rejected value
        value: String,
    },

    /// A value does not fit in the target width.
    #[error("Value {value} does not fit in {bits} bits")]
    Overflow {
        /// The rejected value
        value: String,
        /// Width of the target type
        bits: u32,
    },

    /// Token decimals were missing or not a small non-negative integer.
    #[error("Invalid token decimals '{input}'")]
    InvalidDecimals {
        /// The offending input
        input: String,
    },

    /// A floating-point amount was NaN or infinite.
    #[error("Amount is not a finite number")]
    NonFiniteAmount,
}

impl CodecError {
    /// Create an `InvalidHex` error for the given input.
    pub fn invalid_hex(input: impl Into<String>, source: FromHexError) -> Self {
        CodecError::InvalidHex {
            input: input.into(),
            source,
        }
    }

    /// Create an `InvalidBase58` error for the given input.
    pub fn invalid_base58(input: impl Into<String>, details: impl std::fmt::Display) -> Self {
        CodecError::InvalidBase58 {
            input: input.into(),
            details: details.to_string(),
        }
    }

    /// Create an `InvalidAddress` error with details.
    pub fn invalid_address(details: impl Into<String>) -> Self {
        CodecError::InvalidAddress {
            details: details.into(),
        }
    }

    /// Create an `InvalidNumeral` error for the given input.
    pub fn invalid_numeral(input: impl Into<String>) -> Self {
        CodecError::InvalidNumeral {
            input: input.into(),
        }
    }

    /// Create a `NegativeValue` error for the given value.
    pub fn negative(value: impl std::fmt::Display) -> Self {
        CodecError::NegativeValue {
            value: value.to_string(),
        }
    }

    /// Create an `Overflow` error for the given value and target width.
    pub fn overflow(value: impl std::fmt::Display, bits: u32) -> Self {
        CodecError::Overflow {
            value: value.to_string(),
            bits,
        }
    }
}
