// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction signing
//!
//! A TRON transaction id is the SHA-256 of its protobuf-encoded raw data, and
//! the signature is a recoverable secp256k1 signature over that id, encoded as
//! `r ‖ s ‖ v` with `v = recovery id + 27`.

use std::fmt;

use alloy_primitives::{hex, keccak256, Address};
use k256::ecdsa::SigningKey;
use sha2::{Digest, Sha256};

use crate::errors::SignerError;
use crate::types::address::TronAddress;
use crate::types::transaction::{SignedTransaction, UnsignedTransaction};

/// Offset added to the recovery id in the last signature byte
const RECOVERY_ID_OFFSET: u8 = 27;

/// Signs transactions on behalf of one account
///
/// Implementations may keep the key anywhere (memory, HSM, remote service);
/// the client only needs the account address and a signature.
pub trait TransactionSigner: Send + Sync {
    /// Account the signatures are made for
    fn address(&self) -> TronAddress;

    /// Attach a signature to a node-built transaction
    fn sign(&self, transaction: &UnsignedTransaction) -> Result<SignedTransaction, SignerError>;
}

/// Signer holding a secp256k1 private key in memory
///
/// # Example
///
/// ```rust
/// use tron_trc20::{LocalSigner, TransactionSigner};
///
/// let signer = LocalSigner::from_hex_key(
///     "0000000000000000000000000000000000000000000000000000000000000001",
/// )
/// .unwrap();
/// assert_eq!(
///     signer.address().to_hex(),
///     "417e5f4552091a69125d5dfcb7b8c2659029395bdf"
/// );
/// ```
#[derive(Clone)]
pub struct LocalSigner {
    key: SigningKey,
    address: TronAddress,
}

impl LocalSigner {
    /// Create a signer from a secp256k1 signing key
    pub fn new(key: SigningKey) -> Self {
        let address = address_of(&key);
        Self { key, address }
    }

    /// Create a signer from a 32-byte private key in hex, `0x` prefix optional
    pub fn from_hex_key(private_key: &str) -> Result<Self, SignerError> {
        let bytes = hex::decode(private_key.trim())
            .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(SignerError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let key = SigningKey::from_slice(&bytes)
            .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::new(key))
    }
}

impl TransactionSigner for LocalSigner {
    fn address(&self) -> TronAddress {
        self.address
    }

    fn sign(&self, transaction: &UnsignedTransaction) -> Result<SignedTransaction, SignerError> {
        let raw_data = hex::decode(&transaction.raw_data_hex)
            .map_err(|e| SignerError::InvalidRawData(e.to_string()))?;
        let digest = Sha256::digest(&raw_data);

        // The node's id must be the hash we sign, or we would sign something else
        let computed = hex::encode(digest);
        if !computed.eq_ignore_ascii_case(&transaction.tx_id) {
            return Err(SignerError::TransactionIdMismatch {
                tx_id: transaction.tx_id.clone(),
                computed,
            });
        }

        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| SignerError::SigningFailed(e.to_string()))?;

        let mut encoded = signature.to_bytes().to_vec();
        encoded.push(recovery_id.to_byte() + RECOVERY_ID_OFFSET);

        Ok(SignedTransaction {
            transaction: transaction.clone(),
            signature: vec![hex::encode(encoded)],
        })
    }
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Account address of a key: prefix byte + last 20 bytes of
/// `keccak256(uncompressed public key without its 0x04 tag)`
fn address_of(key: &SigningKey) -> TronAddress {
    let point = key.verifying_key().to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    TronAddress::from_evm(Address::from_slice(&hash[12..]))
}
