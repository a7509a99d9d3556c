// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tron-trc20 library.
//!
//! This module provides strongly-typed errors for all public APIs.
//! It follows a hybrid approach:
//!
//! - **Family-specific errors** for fine-grained handling ([`CodecError`],
//!   [`NodeError`], [`TransactionError`], ...)
//! - **Unified error type** ([`Trc20Error`]) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`ConfigurationError`] - Missing or invalid token / node configuration
//! - [`CodecError`] - Malformed hex, Base58Check or numeral input
//! - [`NodeError`] - The node rejected a read call (balance, history)
//! - [`TransactionError`] - The node rejected a write call, or signing/broadcast failed
//! - [`SignerError`] - Failures of the signing primitive
//!
//! Additionally, [`RpcError`] provides shared variants for transport failures.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use tron_trc20::{TokenClient, TransactionError};
//!
//! match client.transfer(&signer, &recipient, &amount).await {
//!     Ok(tx) => println!("submitted {}", tx.tx_id),
//!     Err(TransactionError::BuildRejected { code, message }) => {
//!         // Nothing was submitted, safe to fix and retry
//!         eprintln!("build rejected ({code}): {message}");
//!     }
//!     Err(e) => {
//!         // May have been applied; check the chain before resubmitting
//!         eprintln!("transfer failed: {e}");
//!     }
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use tron_trc20::{Trc20Error, TokenClient};
//!
//! async fn sweep(client: &TokenClient<HttpNodeClient, HttpNodeClient>) -> Result<(), Trc20Error> {
//!     let balance = client.balance(&holder).await?;
//!     client.transfer(&signer, &treasury, &balance).await?;
//!     Ok(())
//! }
//! ```

mod codec;
mod config;
mod node;
mod rpc;
mod signer;
mod transaction;

pub use codec::CodecError;
pub use config::ConfigurationError;
pub use node::NodeError;
pub use rpc::RpcError;
pub use signer::SignerError;
pub use transaction::TransactionError;

/// Unified error type for all tron-trc20 operations.
///
/// All family-specific error types convert to `Trc20Error` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum Trc20Error {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Malformed input to a conversion.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Read call rejected or failed.
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    /// Write call rejected or failed.
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    /// Signing failed outside of a transfer.
    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),

    /// Transport failure outside of a client operation.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
