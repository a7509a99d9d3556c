// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for client construction.

use super::CodecError;

/// Errors raised while validating configuration or building a client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The token configuration has no contract address.
    #[error("Missing contract address")]
    MissingContractAddress,

    /// The token configuration has no decimals.
    #[error("Missing decimals")]
    MissingDecimals,

    /// The configured contract address could not be parsed.
    #[error("Invalid contract address '{address}'")]
    InvalidContractAddress {
        /// The configured value
        address: String,
        /// Why it was rejected
        #[source]
        source: CodecError,
    },

    /// The node URL could not be parsed.
    #[error("Invalid node URL '{url}'")]
    InvalidNodeUrl {
        /// The configured value
        url: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The API key cannot be sent as an HTTP header value.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
