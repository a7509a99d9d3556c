// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the node's HTTP wallet API

use serde::{Deserialize, Serialize};

use crate::abi::{BALANCE_OF_SELECTOR, TRANSFER_SELECTOR};
use crate::codec::decode_node_message;
use crate::types::transaction::UnsignedTransaction;

/// Body of a `triggerconstantcontract` / `triggersmartcontract` request
///
/// Addresses are in hex form (`visible` is left at the node default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerCallRequest {
    /// Hex address of the TRC20 contract
    pub contract_address: String,
    /// Function signature, e.g. `balanceOf(address)`
    pub function_selector: String,
    /// ABI-encoded arguments, hex without prefix
    pub parameter: String,
    /// Hex address of the caller
    pub owner_address: String,
    /// Maximum fee in sun, only for state-changing calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_limit: Option<u64>,
    /// TRX sent along with the call, in sun
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_value: Option<u64>,
}

impl TriggerCallRequest {
    /// Read-only `balanceOf(address)` call
    pub fn balance_of(
        contract_address: impl Into<String>,
        owner_address: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        Self {
            contract_address: contract_address.into(),
            function_selector: BALANCE_OF_SELECTOR.to_string(),
            parameter: parameter.into(),
            owner_address: owner_address.into(),
            fee_limit: None,
            call_value: None,
        }
    }

    /// State-changing `transfer(address,uint256)` call with no TRX attached
    pub fn transfer(
        contract_address: impl Into<String>,
        owner_address: impl Into<String>,
        parameter: impl Into<String>,
        fee_limit: u64,
    ) -> Self {
        Self {
            contract_address: contract_address.into(),
            function_selector: TRANSFER_SELECTOR.to_string(),
            parameter: parameter.into(),
            owner_address: owner_address.into(),
            fee_limit: Some(fee_limit),
            call_value: Some(0),
        }
    }
}

/// `result` object of a trigger call
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallResult {
    /// Set when the node accepted the call
    #[serde(default)]
    pub result: bool,
    /// Failure code, e.g. `CONTRACT_VALIDATE_ERROR`
    #[serde(default)]
    pub code: Option<String>,
    /// Hex-encoded failure message
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of a trigger call
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TriggerCallResponse {
    /// Outcome reported by the node
    #[serde(default)]
    pub result: Option<CallResult>,
    /// Return data of a constant call, one hex string per output
    #[serde(default)]
    pub constant_result: Vec<String>,
    /// Transaction built by a state-changing call
    #[serde(default)]
    pub transaction: Option<UnsignedTransaction>,
}

impl TriggerCallResponse {
    /// Failure reported by the node as `(code, decoded message)`, if any
    pub fn failure(&self) -> Option<(String, String)> {
        let result = self.result.as_ref()?;
        let code = result.code.as_ref()?;
        let message = result
            .message
            .as_deref()
            .map(decode_node_message)
            .unwrap_or_default();
        Some((code.clone(), message))
    }
}

/// Response of `broadcasttransaction`
///
/// Some nodes nest the outcome as `{"result": {"code", "message"}}` instead
/// of a top-level boolean; both shapes land in the same fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBroadcastResponse")]
pub struct BroadcastResponse {
    /// `true` when the node accepted the transaction
    #[serde(default)]
    pub result: Option<bool>,
    /// Id of the accepted transaction
    #[serde(default)]
    pub txid: Option<String>,
    /// Failure code, e.g. `SIGERROR`
    #[serde(default)]
    pub code: Option<String>,
    /// Hex-encoded failure message
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct RawBroadcastResponse {
    #[serde(default)]
    result: Option<RawBroadcastResult>,
    #[serde(default)]
    txid: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBroadcastResult {
    Flag(bool),
    Nested(CallResult),
    Unrecognized(serde::de::IgnoredAny),
}

impl From<RawBroadcastResponse> for BroadcastResponse {
    fn from(raw: RawBroadcastResponse) -> Self {
        let (result, code, message) = match raw.result {
            Some(RawBroadcastResult::Flag(flag)) => (Some(flag), raw.code, raw.message),
            Some(RawBroadcastResult::Nested(nested)) => (
                Some(nested.result),
                raw.code.or(nested.code),
                raw.message.or(nested.message),
            ),
            Some(RawBroadcastResult::Unrecognized(_)) | None => (None, raw.code, raw.message),
        };
        Self {
            result,
            txid: raw.txid,
            code,
            message,
        }
    }
}

/// Interpreted broadcast response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// Accepted for packing
    Success {
        /// Id echoed by the node, when present
        tx_id: Option<String>,
    },
    /// Rejected, or the response carried no truthy `result`
    Failure {
        /// Failure code, when the node sent one
        code: Option<String>,
        /// Decoded failure message
        message: String,
    },
}

impl BroadcastResponse {
    /// Interpret the response
    ///
    /// Only `result: true` is a success. A missing or false `result` is a
    /// failure even when no code or message was sent.
    pub fn into_outcome(self) -> BroadcastOutcome {
        if self.result == Some(true) {
            return BroadcastOutcome::Success { tx_id: self.txid };
        }
        let message = match self.message.as_deref() {
            Some(message) => decode_node_message(message),
            None if self.result.is_none() => "response carried no result".to_string(),
            None => "node returned result=false".to_string(),
        };
        BroadcastOutcome::Failure {
            code: self.code,
            message,
        }
    }
}
