// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Node access
//!
//! [`NodeApi`] is the seam between the token client and the network. The
//! bundled [`HttpNodeClient`] talks to a full node or TronGrid over HTTP;
//! tests substitute an in-memory implementation.

mod config;
mod http;
mod types;

pub use config::{Network, NodeConfig};
pub use http::HttpNodeClient;
pub use types::{
    BroadcastOutcome, BroadcastResponse, CallResult, TriggerCallRequest, TriggerCallResponse,
};

use async_trait::async_trait;

use crate::errors::RpcError;
use crate::types::transaction::SignedTransaction;

/// Remote procedure calls the token client needs from a node
///
/// Implementations report transport failures as [`RpcError`] and return the
/// node's answer as-is; interpreting result codes is the caller's job.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Run a contract call without creating a transaction
    async fn trigger_constant_contract(
        &self,
        request: &TriggerCallRequest,
    ) -> Result<TriggerCallResponse, RpcError>;

    /// Build a transaction for a state-changing contract call
    async fn trigger_smart_contract(
        &self,
        request: &TriggerCallRequest,
    ) -> Result<TriggerCallResponse, RpcError>;

    /// Submit a signed transaction
    async fn broadcast_transaction(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<BroadcastResponse, RpcError>;
}
