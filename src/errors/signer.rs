// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transaction signing.

/// Errors raised by a [`TransactionSigner`](crate::TransactionSigner).
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// The private key is malformed or not a valid secp256k1 scalar.
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The transaction's raw data is not valid hex.
    #[error("Invalid raw transaction data: {0}")]
    InvalidRawData(String),

    /// The transaction id does not match the hash of its raw data.
    #[error("Transaction id {tx_id} does not match raw data hash {computed}")]
    TransactionIdMismatch {
        /// Id supplied by the node
        tx_id: String,
        /// SHA-256 of the raw data
        computed: String,
    },

    /// The signing primitive failed.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
