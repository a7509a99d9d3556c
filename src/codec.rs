// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversions between bytes, hex, UTF-8 and Base58Check address forms
//!
//! Every function here is pure and deterministic. Malformed input is always
//! reported as a [`CodecError`]; nothing returns a sentinel value.
//!
//! # Examples
//!
//! ```
//! use tron_trc20::codec;
//!
//! // Address-shaped input is treated as an address...
//! let hex = codec::to_hex("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL").unwrap();
//! assert_eq!(hex, "418840e6c55b9ada326d211d818c34a994aeced808");
//! assert_eq!(codec::from_hex(&hex).unwrap(), "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL");
//!
//! // ...anything else as text
//! assert_eq!(codec::to_hex("hello").unwrap(), "68656c6c6f");
//! assert_eq!(codec::from_hex("68656c6c6f").unwrap(), "hello");
//! ```

use std::str::FromStr;

use alloy_primitives::{hex, keccak256};
use num_bigint::BigInt;

use crate::errors::CodecError;
use crate::types::address::{
    TronAddress, ADDRESS_BASE58_LEN, ADDRESS_BASE58_PREFIX, ADDRESS_HEX_LEN, ADDRESS_HEX_PREFIX,
};

/// Decode a hex string into an address or text
///
/// A 42-character string starting with `41` is read as an address and
/// returned in Base58Check form. Anything else is decoded as UTF-8 text.
pub fn from_hex(s: &str) -> Result<String, CodecError> {
    if looks_like_hex_address(s) {
        return hex_to_address(s);
    }
    hex_to_utf8(s)
}

/// Encode an address or text as hex
///
/// A 34-character string starting with `T` is read as a Base58Check address
/// and returned in its 21-byte hex form. Anything else has its UTF-8 bytes
/// hex-encoded.
pub fn to_hex(s: &str) -> Result<String, CodecError> {
    if s.chars().count() == ADDRESS_BASE58_LEN && s.starts_with(ADDRESS_BASE58_PREFIX) {
        return address_to_hex(s);
    }
    Ok(utf8_to_hex(s))
}

/// Convert an address to its 21-byte hex form
///
/// Input that is already a 42-character hex address is returned unchanged.
/// Otherwise the input is Base58Check-decoded; a bad checksum, wrong length or
/// wrong prefix byte is an error.
pub fn address_to_hex(address: &str) -> Result<String, CodecError> {
    if looks_like_hex_address(address) {
        hex::decode(address).map_err(|e| CodecError::invalid_hex(address, e))?;
        return Ok(address.to_string());
    }
    Ok(TronAddress::from_base58(address)?.to_hex())
}

/// Base58Check-encode a hex byte string
///
/// The prefix byte is expected to already be part of the input, so no version
/// byte is added. Empty, odd-length and non-hex input are rejected.
pub fn hex_to_address(hex_str: &str) -> Result<String, CodecError> {
    let bytes = hex_to_bytes(hex_str)?;
    Ok(bs58::encode(bytes).with_check().into_string())
}

/// Hex-encode the UTF-8 bytes of a string
pub fn utf8_to_hex(s: &str) -> String {
    hex::encode(s.as_bytes())
}

/// Decode hex into a UTF-8 string
pub fn hex_to_utf8(hex_str: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(hex_str).map_err(|e| CodecError::invalid_hex(hex_str, e))?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

/// Decode a strict hex byte string: non-empty, even length, hex digits only
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, CodecError> {
    if hex_str.is_empty() {
        return Err(CodecError::EmptyHex);
    }
    if hex_str.len() % 2 != 0 {
        return Err(CodecError::OddLengthHex {
            len: hex_str.len(),
        });
    }
    hex::decode(hex_str).map_err(|e| CodecError::invalid_hex(hex_str, e))
}

/// Parse a decimal numeral into an arbitrary-precision integer
pub fn to_big_integer(s: &str) -> Result<BigInt, CodecError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CodecError::invalid_numeral(s));
    }
    BigInt::from_str(trimmed).map_err(|_| CodecError::invalid_numeral(s))
}

/// Keccak-256 digest as lowercase hex, optionally `0x`-prefixed
pub fn hash_keccak256(data: impl AsRef<[u8]>, with_prefix: bool) -> String {
    let digest = keccak256(data.as_ref());
    if with_prefix {
        hex::encode_prefixed(digest)
    } else {
        hex::encode(digest)
    }
}

/// Decode an error message reported by the node
///
/// Node messages are hex-encoded text. Input that is not hex is returned
/// verbatim; invalid UTF-8 is replaced lossily.
pub fn decode_node_message(message: &str) -> String {
    match hex::decode(message) {
        Ok(bytes) if !bytes.is_empty() => String::from_utf8_lossy(&bytes).into_owned(),
        _ => message.to_string(),
    }
}

fn looks_like_hex_address(s: &str) -> bool {
    s.len() == ADDRESS_HEX_LEN && s.starts_with(ADDRESS_HEX_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE58: &str = "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL";
    const HEX: &str = "418840e6c55b9ada326d211d818c34a994aeced808";

    #[test]
    fn test_address_to_hex_from_base58() {
        assert_eq!(address_to_hex(BASE58).unwrap(), HEX);
    }

    #[test]
    fn test_address_to_hex_is_idempotent() {
        assert_eq!(address_to_hex(HEX).unwrap(), HEX);
    }

    #[test]
    fn test_address_to_hex_rejects_bad_checksum() {
        assert!(address_to_hex("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeM").is_err());
    }

    #[test]
    fn test_hex_to_address() {
        assert_eq!(hex_to_address(HEX).unwrap(), BASE58);
    }

    #[test]
    fn test_hex_to_address_rejects_odd_length() {
        assert_eq!(
            hex_to_address("418"),
            Err(CodecError::OddLengthHex { len: 3 })
        );
    }

    #[test]
    fn test_hex_to_address_rejects_empty() {
        assert_eq!(hex_to_address(""), Err(CodecError::EmptyHex));
    }

    #[test]
    fn test_hex_to_address_rejects_non_hex() {
        assert!(matches!(
            hex_to_address("zz"),
            Err(CodecError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_from_hex_dispatches_on_address_shape() {
        assert_eq!(from_hex(HEX).unwrap(), BASE58);
        assert_eq!(from_hex("68656c6c6f").unwrap(), "hello");
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(from_hex("xyz").is_err());
    }

    #[test]
    fn test_from_hex_rejects_invalid_utf8() {
        assert_eq!(from_hex("ff"), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn test_to_hex_dispatches_on_address_shape() {
        assert_eq!(to_hex(BASE58).unwrap(), HEX);
        assert_eq!(to_hex("hello").unwrap(), "68656c6c6f");
    }

    #[test]
    fn test_utf8_round_trip() {
        let text = "transfer: 1.5 USDT ✓";
        assert_eq!(hex_to_utf8(&utf8_to_hex(text)).unwrap(), text);
    }

    #[test]
    fn test_to_big_integer() {
        assert_eq!(to_big_integer("1500000").unwrap(), BigInt::from(1_500_000));
        assert_eq!(to_big_integer("-42").unwrap(), BigInt::from(-42));
        assert_eq!(
            to_big_integer("115792089237316195423570985008687907853269984665640564039457584007913129639936")
                .unwrap()
                .bits(),
            257
        );
    }

    #[test]
    fn test_to_big_integer_rejects_non_numeric() {
        assert!(matches!(
            to_big_integer("12a"),
            Err(CodecError::InvalidNumeral { .. })
        ));
        assert!(to_big_integer("").is_err());
        assert!(to_big_integer("1.5").is_err());
    }

    #[test]
    fn test_hash_keccak256_empty() {
        assert_eq!(
            hash_keccak256(b"", false),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_hash_keccak256_prefix() {
        let prefixed = hash_keccak256("transfer(address,uint256)", true);
        assert!(prefixed.starts_with("0xa9059cbb"));
        assert_eq!(prefixed.len(), 66);
    }

    #[test]
    fn test_decode_node_message() {
        // "REVERT opcode executed"
        let encoded = utf8_to_hex("REVERT opcode executed");
        assert_eq!(decode_node_message(&encoded), "REVERT opcode executed");
        assert_eq!(decode_node_message("plain text"), "plain text");
        assert_eq!(decode_node_message(""), "");
    }
}
