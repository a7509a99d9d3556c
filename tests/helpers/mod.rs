// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tron-trc20 integration tests
//!
//! Provides in-memory implementations of [`NodeApi`] and [`TransferHistory`]
//! so client behavior can be tested without a real node.

#![allow(dead_code)]

use std::sync::Mutex;

use alloy_primitives::hex;
use async_trait::async_trait;
use num_bigint::BigInt;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use tron_trc20::{
    abi, BroadcastResponse, NodeApi, RpcError, SignedTransaction, TransferHistory,
    TransferRecord, TriggerCallRequest, TriggerCallResponse, TronAddress,
};

/// Private key 1, whose address is `417e5f4552091a69125d5dfcb7b8c2659029395bdf`
pub const TEST_PRIVATE_KEY: &str =
    "0000000000000000000000000000000000000000000000000000000000000001";

/// A holder address
pub const HOLDER: &str = "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL";

/// Raw data the mock node "builds" for every transfer
pub const RAW_DATA_HEX: &str = "0a02d1a52208c6e87a0e3f6a1b2c40e0e1c3b0c1315a";

/// Canned reply for one endpoint
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer with this JSON body
    Json(Value),
    /// Fail with this HTTP status and body
    HttpStatus(u16, String),
}

impl Reply {
    fn into_result<T: serde::de::DeserializeOwned>(self, endpoint: &str) -> Result<T, RpcError> {
        match self {
            Reply::Json(value) => {
                serde_json::from_value(value).map_err(|e| RpcError::invalid_response(endpoint, e))
            }
            Reply::HttpStatus(status, body) => Err(RpcError::HttpStatus {
                endpoint: endpoint.to_string(),
                status,
                body,
            }),
        }
    }
}

/// Mock node with one canned reply per endpoint
///
/// Every request is recorded so tests can assert on what the client sent.
///
/// # Example
///
/// ```rust,ignore
/// let node = MockNode::new().with_balance_words(&[balance_word(1_500_000)]);
/// let client = TokenClient::new(node, MockHistory::new(), usdt());
/// ```
pub struct MockNode {
    constant_reply: Reply,
    smart_reply: Reply,
    broadcast_reply: Reply,
    pub constant_calls: Mutex<Vec<TriggerCallRequest>>,
    pub smart_calls: Mutex<Vec<TriggerCallRequest>>,
    pub broadcasts: Mutex<Vec<SignedTransaction>>,
}

impl MockNode {
    /// Zero balance, a valid built transaction, and a successful broadcast
    pub fn new() -> Self {
        let tx = built_transaction(RAW_DATA_HEX);
        let tx_id = tx["txID"].clone();
        Self {
            constant_reply: Reply::Json(json!({
                "result": { "result": true },
                "constant_result": [balance_word(0)]
            })),
            smart_reply: Reply::Json(json!({
                "result": { "result": true },
                "transaction": tx
            })),
            broadcast_reply: Reply::Json(json!({ "result": true, "txid": tx_id })),
            constant_calls: Mutex::new(Vec::new()),
            smart_calls: Mutex::new(Vec::new()),
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    /// Constant calls return these words in `constant_result`
    pub fn with_balance_words(mut self, words: &[String]) -> Self {
        self.constant_reply = Reply::Json(json!({
            "result": { "result": true },
            "constant_result": words
        }));
        self
    }

    /// Replace the reply to constant calls
    pub fn with_constant_reply(mut self, reply: Reply) -> Self {
        self.constant_reply = reply;
        self
    }

    /// Replace the reply to transaction builds
    pub fn with_smart_reply(mut self, reply: Reply) -> Self {
        self.smart_reply = reply;
        self
    }

    /// Replace the reply to broadcasts
    pub fn with_broadcast_reply(mut self, reply: Reply) -> Self {
        self.broadcast_reply = reply;
        self
    }

    pub fn constant_calls(&self) -> Vec<TriggerCallRequest> {
        self.constant_calls.lock().unwrap().clone()
    }

    pub fn smart_calls(&self) -> Vec<TriggerCallRequest> {
        self.smart_calls.lock().unwrap().clone()
    }

    pub fn broadcasts(&self) -> Vec<SignedTransaction> {
        self.broadcasts.lock().unwrap().clone()
    }
}

impl Default for MockNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodeApi for MockNode {
    async fn trigger_constant_contract(
        &self,
        request: &TriggerCallRequest,
    ) -> Result<TriggerCallResponse, RpcError> {
        self.constant_calls.lock().unwrap().push(request.clone());
        self.constant_reply
            .clone()
            .into_result("wallet/triggerconstantcontract")
    }

    async fn trigger_smart_contract(
        &self,
        request: &TriggerCallRequest,
    ) -> Result<TriggerCallResponse, RpcError> {
        self.smart_calls.lock().unwrap().push(request.clone());
        self.smart_reply
            .clone()
            .into_result("wallet/triggersmartcontract")
    }

    async fn broadcast_transaction(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<BroadcastResponse, RpcError> {
        self.broadcasts.lock().unwrap().push(transaction.clone());
        self.broadcast_reply
            .clone()
            .into_result("wallet/broadcasttransaction")
    }
}

/// Mock transfer history serving a fixed list of records
pub struct MockHistory {
    records: Vec<TransferRecord>,
    failure: Option<Reply>,
    pub calls: Mutex<Vec<(TronAddress, TronAddress, Option<u32>)>>,
}

impl MockHistory {
    /// No records
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve these records, newest first
    pub fn with_records(mut self, records: Vec<TransferRecord>) -> Self {
        self.records = records;
        self
    }

    /// Fail every lookup with this HTTP status
    pub fn failing_with(mut self, status: u16, body: &str) -> Self {
        self.failure = Some(Reply::HttpStatus(status, body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(TronAddress, TronAddress, Option<u32>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransferHistory for MockHistory {
    async fn transfers(
        &self,
        contract: &TronAddress,
        account: &TronAddress,
        limit: Option<u32>,
    ) -> Result<Vec<TransferRecord>, RpcError> {
        self.calls.lock().unwrap().push((*contract, *account, limit));
        if let Some(failure) = &self.failure {
            return failure.clone().into_result("v1/accounts/transactions/trc20");
        }
        let take = limit.map_or(self.records.len(), |l| l as usize);
        Ok(self.records.iter().take(take).cloned().collect())
    }
}

/// A node-built transaction whose id is the SHA-256 of its raw data
pub fn built_transaction(raw_data_hex: &str) -> Value {
    let raw = hex::decode(raw_data_hex).unwrap();
    json!({
        "txID": hex::encode(Sha256::digest(&raw)),
        "raw_data": {
            "contract": [{ "type": "TriggerSmartContract" }],
            "expiration": 1_700_000_060_000i64,
            "fee_limit": 100_000_000
        },
        "raw_data_hex": raw_data_hex,
        "visible": false
    })
}

/// One ABI word holding `value`, as the node returns it in `constant_result`
pub fn balance_word(value: u64) -> String {
    abi::to_integer_parameter(&BigInt::from(value)).unwrap()
}

/// A transfer record as TronGrid reports it
pub fn transfer_record(id: &str, from: &str, to: &str, value: &str) -> TransferRecord {
    serde_json::from_value(json!({
        "transaction_id": id,
        "token_info": {
            "symbol": "USDT",
            "address": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
            "decimals": 6,
            "name": "Tether USD"
        },
        "block_timestamp": 1_700_000_000_000i64,
        "from": from,
        "to": to,
        "type": "Transfer",
        "value": value
    }))
    .unwrap()
}

/// Hex-encode a node message the way the node does
pub fn node_message(text: &str) -> String {
    hex::encode(text.as_bytes())
}
