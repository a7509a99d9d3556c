// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for token client operations.
//!
//! Telemetry is kept apart from business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here, attached to
//! the operation's future with [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param_value))
//!     .await
//! }
//! ```

use tracing::{Level, Span};

use crate::types::address::TronAddress;

/// Create span for a TRC20 balance query.
///
/// Parent: None (root span for this operation)
/// Children: node_request span
#[inline]
pub(crate) fn balance(contract: &TronAddress, owner: &TronAddress) -> Span {
    tracing::span!(
        Level::INFO,
        "trc20.balance",
        contract = %contract,
        owner = %owner,
    )
}

/// Create span for a TRC20 transfer.
///
/// The amount is recorded in display units as given by the caller.
///
/// Parent: None (root span for this operation)
/// Children: node_request spans for build and broadcast
#[inline]
pub(crate) fn transfer(
    contract: &TronAddress,
    from: &TronAddress,
    to: &TronAddress,
    amount: &bigdecimal::BigDecimal,
) -> Span {
    tracing::span!(
        Level::INFO,
        "trc20.transfer",
        contract = %contract,
        from = %from,
        to = %to,
        amount = %amount,
        tx_id = tracing::field::Empty,
    )
}

/// Create span for a transfer history lookup.
///
/// Parent: None (root span for this operation)
/// Children: node_request span, when the history source is HTTP
#[inline]
pub(crate) fn wallet_transactions(
    contract: &TronAddress,
    account: &TronAddress,
    limit: Option<u32>,
) -> Span {
    tracing::span!(
        Level::INFO,
        "trc20.wallet_transactions",
        contract = %contract,
        account = %account,
        limit = ?limit,
    )
}

/// Create span for a single HTTP request to the node.
///
/// Parent: balance, transfer or wallet_transactions span
/// Children: None
#[inline]
pub(crate) fn node_request(method: &'static str, endpoint: &str) -> Span {
    tracing::debug_span!("trc20.node_request", method = method, endpoint = %endpoint)
}
