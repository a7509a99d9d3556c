// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared transport error types for node operations.
//!
//! This module provides error types for failures that occur while talking to a
//! node over HTTP, independent of whether the call was a read or a write.

/// Errors that can occur while calling a node endpoint.
///
/// These describe transport-level problems: the request never produced a
/// node-level answer. Node-level rejections (a result code in an otherwise
/// well-formed response) are reported through
/// [`NodeError`](crate::NodeError) and
/// [`TransactionError`](crate::TransactionError) instead.
///
/// # Examples
///
/// ```rust
/// use tron_trc20::RpcError;
///
/// let error = RpcError::HttpStatus {
///     endpoint: "/wallet/triggerconstantcontract".to_string(),
///     status: 503,
///     body: "unavailable".to_string(),
/// };
/// assert_eq!(error.status_code(), Some(503));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The HTTP request could not be completed.
    ///
    /// Covers connection failures, TLS errors and timeouts.
    #[error("Request to {endpoint} failed")]
    RequestFailed {
        /// Endpoint path that was called
        endpoint: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node answered with a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    HttpStatus {
        /// Endpoint path that was called
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response from {endpoint}")]
    InvalidResponse {
        /// Endpoint path that was called
        endpoint: String,
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service reported a failure inside a well-formed body.
    #[error("{endpoint} reported an error: {message}")]
    Service {
        /// Endpoint path that was called
        endpoint: String,
        /// Message reported by the service
        message: String,
    },
}

impl RpcError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create an `InvalidResponse` error from any error type.
    pub fn invalid_response(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::InvalidResponse {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `Service` error.
    pub fn service(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::Service {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// HTTP status code, when the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RpcError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
