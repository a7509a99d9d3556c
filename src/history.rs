// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! TRC20 transfer history
//!
//! History is served by an indexer rather than the node's wallet API, so it is
//! its own capability. [`HttpNodeClient`](crate::HttpNodeClient) implements it
//! against TronGrid's account endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RpcError;
use crate::types::address::TronAddress;

/// Source of TRC20 transfer records for an account
#[async_trait]
pub trait TransferHistory: Send + Sync {
    /// Transfers of `contract` sent or received by `account`, newest first
    ///
    /// `limit` caps the number of records; `None` leaves it to the source.
    async fn transfers(
        &self,
        contract: &TronAddress,
        account: &TronAddress,
        limit: Option<u32>,
    ) -> Result<Vec<TransferRecord>, RpcError>;
}

/// Token metadata attached to a transfer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Ticker symbol
    #[serde(default)]
    pub symbol: String,
    /// Contract address, Base58Check
    #[serde(default)]
    pub address: String,
    /// Token decimals
    #[serde(default)]
    pub decimals: u8,
    /// Token name
    #[serde(default)]
    pub name: String,
}

/// One TRC20 transfer, as reported by the history source
///
/// Addresses and amounts are kept as the source sent them; `value` is in
/// minimum units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Id of the transaction carrying the transfer
    pub transaction_id: String,
    /// Block timestamp, milliseconds since the Unix epoch
    pub block_timestamp: i64,
    /// Sender, Base58Check
    pub from: String,
    /// Recipient, Base58Check
    pub to: String,
    /// Event type, normally `Transfer`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Amount in minimum units, decimal string
    pub value: String,
    /// Token metadata
    #[serde(default)]
    pub token_info: Option<TokenInfo>,
}

impl TransferRecord {
    /// Block time, if the timestamp is in range
    pub fn block_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.block_timestamp)
    }
}

/// Page returned by TronGrid's `/v1/accounts/{address}/transactions/trc20`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct HistoryPage {
    #[serde(default)]
    pub data: Vec<TransferRecord>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
