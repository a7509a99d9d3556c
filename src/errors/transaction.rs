// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for write operations (transfers).
//!
//! A [`TransactionError`] is deliberately distinct from
//! [`NodeError`](crate::NodeError): once a signed transaction has been handed
//! to the node, the transfer may have been partially applied. Callers must
//! check the chain before resubmitting; the client never retries a transfer.

use super::{CodecError, RpcError, SignerError};

/// Errors that can occur while building, signing or broadcasting a transfer.
///
/// Variants are ordered by the stage at which they occur. Everything up to and
/// including [`Signing`](TransactionError::Signing) happens before anything is
/// submitted for inclusion.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transfer amount could not be converted to minimum units.
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(#[source] CodecError),

    /// The node refused to build the transaction.
    #[error("Node rejected transaction build ({code}): {message}")]
    BuildRejected {
        /// Result code reported by the node
        code: String,
        /// Decoded error message
        message: String,
    },

    /// The node accepted the call but returned no transaction to sign.
    #[error("Node returned no transaction to sign")]
    MissingTransaction,

    /// Signing the built transaction failed.
    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),

    /// Transport failure while building or broadcasting.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// The node rejected the signed transaction at broadcast.
    #[error("Broadcast rejected: {message}")]
    BroadcastRejected {
        /// Result code reported by the node, if any
        code: Option<String>,
        /// Decoded error message
        message: String,
    },
}

impl TransactionError {
    /// Create a `BuildRejected` error.
    pub fn build_rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        TransactionError::BuildRejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Node result code or HTTP status, when available.
    pub fn code(&self) -> Option<String> {
        match self {
            TransactionError::BuildRejected { code, .. } => Some(code.clone()),
            TransactionError::BroadcastRejected { code, .. } => code.clone(),
            TransactionError::Rpc(e) => e.status_code().map(|s| s.to_string()),
            _ => None,
        }
    }
}
