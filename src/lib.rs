// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Client SDK for TRC20 tokens on TRON.
//!
//! # Overview
//!
//! - [`TokenClient`]: balance queries, transfers and transfer history for one
//!   token, against any [`NodeApi`] and [`TransferHistory`]
//! - [`HttpNodeClient`]: both capabilities over the node / TronGrid HTTP API
//! - [`LocalSigner`]: in-memory secp256k1 [`TransactionSigner`]
//! - [`codec`], [`amount`], [`abi`]: pure conversions for addresses, hex,
//!   amounts and ABI parameters
//!
//! Amounts are exact: display amounts are [`BigDecimal`](bigdecimal::BigDecimal)
//! and minimum units are [`BigInt`](num_bigint::BigInt).
//!
//! # Logging
//!
//! The crate emits [`tracing`] spans (`trc20.*`) and events but never installs
//! a subscriber.

pub mod abi;
pub mod amount;
mod client;
pub mod codec;
pub mod config;
pub mod errors;
pub mod history;
pub mod node;
pub mod signer;
mod spans;
pub mod types;

pub use client::TokenClient;
pub use config::TokenConfig;
pub use errors::{
    CodecError, ConfigurationError, NodeError, RpcError, SignerError, TransactionError,
    Trc20Error,
};
pub use history::{TokenInfo, TransferHistory, TransferRecord};
pub use node::{
    BroadcastOutcome, BroadcastResponse, CallResult, HttpNodeClient, Network, NodeApi,
    NodeConfig, TriggerCallRequest, TriggerCallResponse,
};
pub use signer::{LocalSigner, TransactionSigner};
pub use types::address::TronAddress;
pub use types::tokens::{TokenDecimals, TokenDescriptor};
pub use types::transaction::{
    SignedTransaction, Transaction, TransactionStatus, UnsignedTransaction,
};
