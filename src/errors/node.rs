// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for read operations against the node.
//!
//! Balance queries and history lookups report failures through [`NodeError`].
//! Read operations have no side effects, so callers may retry them freely.

use super::{CodecError, RpcError};

/// Errors that can occur during read-only node operations.
///
/// # Examples
///
/// ```rust,ignore
/// use tron_trc20::{NodeError, TokenClient};
///
/// match client.balance(&holder).await {
///     Ok(balance) => println!("balance: {balance}"),
///     Err(NodeError::Rejected { code, message }) => {
///         eprintln!("node rejected the call ({code}): {message}");
///     }
///     Err(NodeError::Rpc(e)) => eprintln!("transport failure, retrying: {e}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The node rejected the call and reported a result code.
    ///
    /// `message` is the node's hex-encoded message, already decoded.
    #[error("Node rejected call ({code}): {message}")]
    Rejected {
        /// Result code reported by the node (e.g. `CONTRACT_VALIDATE_ERROR`)
        code: String,
        /// Decoded error message
        message: String,
    },

    /// The node answered but the result could not be interpreted.
    #[error("Invalid call result: {details}")]
    InvalidResult {
        /// What was wrong with the result
        details: String,
        /// The conversion failure, when there was one
        #[source]
        source: Option<CodecError>,
    },

    /// Transport failure while calling the node.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// The transaction-history capability failed.
    #[error("History lookup failed: {0}")]
    History(#[source] RpcError),
}

impl NodeError {
    /// Create a `Rejected` error.
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        NodeError::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an `InvalidResult` error without an underlying conversion failure.
    pub fn invalid_result(details: impl Into<String>) -> Self {
        NodeError::InvalidResult {
            details: details.into(),
            source: None,
        }
    }

    /// Create an `InvalidResult` error caused by a conversion failure.
    pub fn conversion_failed(details: impl Into<String>, source: CodecError) -> Self {
        NodeError::InvalidResult {
            details: details.into(),
            source: Some(source),
        }
    }

    /// Node result code or HTTP status, when available.
    pub fn code(&self) -> Option<String> {
        match self {
            NodeError::Rejected { code, .. } => Some(code.clone()),
            NodeError::Rpc(e) | NodeError::History(e) => e.status_code().map(|s| s.to_string()),
            NodeError::InvalidResult { .. } => None,
        }
    }
}
