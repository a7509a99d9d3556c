// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction types
//!
//! The node builds transactions; this crate never constructs `raw_data`
//! itself. An [`UnsignedTransaction`] is passed through unmodified to the
//! signer, which wraps it into a [`SignedTransaction`] for broadcast. A
//! successful broadcast yields a [`Transaction`] in the
//! [`Packing`](TransactionStatus::Packing) state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A transaction built by the node, awaiting a signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    /// Transaction id: hex SHA-256 of the raw data bytes
    #[serde(rename = "txID")]
    pub tx_id: String,

    /// Raw transaction structure, opaque to this crate
    pub raw_data: Value,

    /// Protobuf-encoded raw data, hex
    pub raw_data_hex: String,

    /// Whether addresses inside `raw_data` use Base58 form
    #[serde(default)]
    pub visible: bool,
}

/// A transaction with signatures attached, ready for broadcast
///
/// Serializes flat: the broadcast endpoint expects the unsigned fields plus a
/// `signature` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The transaction as built by the node
    #[serde(flatten)]
    pub transaction: UnsignedTransaction,

    /// Hex-encoded 65-byte signatures
    pub signature: Vec<String>,
}

impl SignedTransaction {
    /// Transaction id
    pub fn tx_id(&self) -> &str {
        &self.transaction.tx_id
    }
}

/// Lifecycle status of a submitted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Accepted by the node, awaiting block inclusion
    Packing,
}

impl TransactionStatus {
    /// Wire/display form of the status
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Packing => "PACKING",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful transfer
///
/// Confirmation is not tracked here; poll the chain with `tx_id` to follow
/// the transaction past [`TransactionStatus::Packing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id, as built by the node
    pub tx_id: String,
    /// Raw transaction data, as built by the node
    pub raw_data: Value,
    /// Submission status
    pub status: TransactionStatus,
}

impl Transaction {
    /// A freshly broadcast transaction
    pub fn packing(built: UnsignedTransaction) -> Self {
        Self {
            tx_id: built.tx_id,
            raw_data: built.raw_data,
            status: TransactionStatus::Packing,
        }
    }
}
