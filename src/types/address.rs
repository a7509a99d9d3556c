// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! TRON account address type
//!
//! A TRON address is 21 bytes: the network prefix `0x41` followed by the
//! 20-byte account id. It has two textual forms: 42 hex characters starting
//! with `41`, and 34 Base58Check characters starting with `T`.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{hex, Address};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CodecError;

/// Prefix byte of every mainnet-style address
pub const ADDRESS_PREFIX: u8 = 0x41;
/// Hex form of [`ADDRESS_PREFIX`]
pub const ADDRESS_HEX_PREFIX: &str = "41";
/// First character of every Base58Check address
pub const ADDRESS_BASE58_PREFIX: char = 'T';
/// Length of the hex form
pub const ADDRESS_HEX_LEN: usize = 42;
/// Length of the raw form
pub const ADDRESS_BYTES_LEN: usize = 21;
/// Length of the Base58Check form
pub const ADDRESS_BASE58_LEN: usize = 34;

/// TRON account or contract address
///
/// Immutable once constructed. Both textual forms are derived from the same
/// 21 bytes, so they always agree.
///
/// # Examples
///
/// ```
/// use tron_trc20::TronAddress;
///
/// let a: TronAddress = "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL".parse().unwrap();
/// let b: TronAddress = "418840e6c55b9ada326d211d818c34a994aeced808".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_hex(), "418840e6c55b9ada326d211d818c34a994aeced808");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TronAddress([u8; ADDRESS_BYTES_LEN]);

impl TronAddress {
    /// Construct from raw 21 bytes (must be 0x41-prefixed)
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES_LEN]) -> Result<Self, CodecError> {
        if bytes[0] != ADDRESS_PREFIX {
            return Err(CodecError::invalid_address(format!(
                "expected prefix 0x{ADDRESS_PREFIX:x}, got 0x{:02x}",
                bytes[0]
            )));
        }
        Ok(Self(bytes))
    }

    /// Construct from a byte slice (must be 21 bytes, 0x41-prefixed)
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let inner: [u8; ADDRESS_BYTES_LEN] = bytes.try_into().map_err(|_| {
            CodecError::invalid_address(format!(
                "expected {ADDRESS_BYTES_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Self::from_bytes(inner)
    }

    /// Build an address from a 20-byte EVM-style account id
    pub fn from_evm(address: Address) -> Self {
        let mut inner = [0u8; ADDRESS_BYTES_LEN];
        inner[0] = ADDRESS_PREFIX;
        inner[1..].copy_from_slice(address.as_slice());
        Self(inner)
    }

    /// Construct from a Base58Check string
    pub fn from_base58(s: &str) -> Result<Self, CodecError> {
        let data = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|e| CodecError::invalid_base58(s, e))?;
        Self::from_slice(&data)
    }

    /// Construct from a hex string, with or without `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let data = hex::decode(digits).map_err(|e| CodecError::invalid_hex(s, e))?;
        Self::from_slice(&data)
    }

    /// Base58Check form (canonical user format)
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).with_check().into_string()
    }

    /// Lowercase hex form of all 21 bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The 21 raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES_LEN] {
        &self.0
    }

    /// The 20-byte account id without the prefix byte
    pub fn evm_address(&self) -> Address {
        Address::from_slice(&self.0[1..])
    }
}

impl fmt::Display for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TronAddress({} / {})", self.to_base58(), self.to_hex())
    }
}

impl FromStr for TronAddress {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == ADDRESS_BASE58_LEN && s.starts_with(ADDRESS_BASE58_PREFIX) {
            return Self::from_base58(s);
        }

        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() == ADDRESS_HEX_LEN && digits.starts_with(ADDRESS_HEX_PREFIX) {
            return Self::from_hex(digits);
        }

        Err(CodecError::invalid_address(format!(
            "'{s}' is neither Base58 ({ADDRESS_BASE58_LEN} chars starting with '{ADDRESS_BASE58_PREFIX}') \
             nor hex ({ADDRESS_HEX_LEN} chars starting with '{ADDRESS_HEX_PREFIX}')"
        )))
    }
}

impl TryFrom<&str> for TronAddress {
    type Error = CodecError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for TronAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for TronAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
