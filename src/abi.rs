// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ABI parameter encoding for the TRC20 calls this crate makes
//!
//! The node takes the function selector as a signature string and the
//! arguments as a hex blob of 32-byte ABI words. Only the two argument types
//! used by `balanceOf(address)` and `transfer(address,uint256)` are covered.

use alloy_primitives::{hex, keccak256, U256};
use alloy_sol_types::SolValue;
use num_bigint::{BigInt, Sign};

use crate::errors::CodecError;
use crate::TronAddress;

/// Selector of the TRC20 balance query
pub const BALANCE_OF_SELECTOR: &str = "balanceOf(address)";

/// Selector of the TRC20 transfer
pub const TRANSFER_SELECTOR: &str = "transfer(address,uint256)";

/// Hex characters in one ABI word
pub const ABI_WORD_HEX_LEN: usize = 64;

const UINT256_BITS: u64 = 256;

/// Encode an `address` argument as one ABI word
///
/// The prefix byte is dropped and the 20-byte account id is left-padded with
/// zeros to 32 bytes.
///
/// # Examples
///
/// ```
/// use tron_trc20::{abi, TronAddress};
///
/// let to: TronAddress = "418840e6c55b9ada326d211d818c34a994aeced808".parse().unwrap();
/// assert_eq!(
///     abi::to_address_parameter(&to),
///     "0000000000000000000000008840e6c55b9ada326d211d818c34a994aeced808"
/// );
/// ```
pub fn to_address_parameter(address: &TronAddress) -> String {
    hex::encode(address.evm_address().abi_encode())
}

/// Encode a `uint256` argument as one ABI word
///
/// Negative values and values of 2^256 or more are rejected; nothing is ever
/// silently truncated.
pub fn to_integer_parameter(value: &BigInt) -> Result<String, CodecError> {
    Ok(hex::encode(to_uint256(value)?.abi_encode()))
}

/// Parameter blob for `transfer(address,uint256)`
pub fn encode_transfer_parameters(
    to: &TronAddress,
    min_units: &BigInt,
) -> Result<String, CodecError> {
    let mut parameter = to_address_parameter(to);
    parameter.push_str(&to_integer_parameter(min_units)?);
    Ok(parameter)
}

/// Parse the first ABI word of a constant result as an unsigned integer
///
/// The word must be exactly 64 hex digits; signs, separators and `0x`
/// prefixes are rejected.
pub fn decode_uint256_word(result: &str) -> Result<BigInt, CodecError> {
    if result.is_empty() {
        return Err(CodecError::EmptyHex);
    }
    let word = result
        .get(..ABI_WORD_HEX_LEN)
        .ok_or_else(|| CodecError::invalid_numeral(result))?;
    if !word.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::invalid_numeral(word));
    }
    let bytes = hex::decode(word).map_err(|e| CodecError::invalid_hex(word, e))?;
    Ok(BigInt::from_bytes_be(Sign::Plus, &bytes))
}

/// First four bytes of the Keccak-256 of a function signature, as hex
///
/// The node derives this itself from the selector string; it is exposed for
/// logging and for checking call data against explorers.
pub fn function_selector_id(signature: &str) -> String {
    hex::encode(&keccak256(signature.as_bytes())[..4])
}

fn to_uint256(value: &BigInt) -> Result<U256, CodecError> {
    if value.sign() == Sign::Minus {
        return Err(CodecError::negative(value));
    }
    if value.bits() > UINT256_BITS {
        return Err(CodecError::overflow(value, UINT256_BITS as u32));
    }
    let (_, bytes) = value.to_bytes_be();
    U256::try_from_be_slice(&bytes).ok_or_else(|| CodecError::overflow(value, UINT256_BITS as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> TronAddress {
        "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL".parse().unwrap()
    }

    fn two_pow_256() -> BigInt {
        BigInt::from(1u8) << 256
    }

    #[test]
    fn test_address_parameter() {
        let encoded = to_address_parameter(&address());
        assert_eq!(encoded.len(), ABI_WORD_HEX_LEN);
        assert_eq!(
            encoded,
            "0000000000000000000000008840e6c55b9ada326d211d818c34a994aeced808"
        );
    }

    #[test]
    fn test_integer_parameter() {
        let encoded = to_integer_parameter(&BigInt::from(1_500_000)).unwrap();
        assert_eq!(encoded.len(), ABI_WORD_HEX_LEN);
        assert!(encoded.ends_with("16e360"));
        assert!(encoded.trim_end_matches("16e360").chars().all(|c| c == '0'));
    }

    #[test]
    fn test_integer_parameter_zero() {
        assert_eq!(
            to_integer_parameter(&BigInt::from(0)).unwrap(),
            "0".repeat(ABI_WORD_HEX_LEN)
        );
    }

    #[test]
    fn test_integer_parameter_max() {
        let max = two_pow_256() - 1;
        assert_eq!(
            to_integer_parameter(&max).unwrap(),
            "f".repeat(ABI_WORD_HEX_LEN)
        );
    }

    #[test]
    fn test_integer_parameter_rejects_overflow() {
        assert!(matches!(
            to_integer_parameter(&two_pow_256()),
            Err(CodecError::Overflow { bits: 256, .. })
        ));
    }

    #[test]
    fn test_integer_parameter_rejects_negative() {
        assert!(matches!(
            to_integer_parameter(&BigInt::from(-1)),
            Err(CodecError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_transfer_parameters() {
        let blob = encode_transfer_parameters(&address(), &BigInt::from(1_500_000)).unwrap();
        assert_eq!(blob.len(), 2 * ABI_WORD_HEX_LEN);
        assert!(blob.starts_with("0000000000000000000000008840e6c5"));
        assert!(blob.ends_with("16e360"));
    }

    #[test]
    fn test_decode_uint256_word() {
        let word = to_integer_parameter(&BigInt::from(123_456_789)).unwrap();
        assert_eq!(decode_uint256_word(&word).unwrap(), BigInt::from(123_456_789));
    }

    #[test]
    fn test_decode_uint256_word_uses_first_word_only() {
        let first = to_integer_parameter(&BigInt::from(7)).unwrap();
        let second = to_integer_parameter(&BigInt::from(9)).unwrap();
        let result = format!("{first}{second}");
        assert_eq!(decode_uint256_word(&result).unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_decode_uint256_word_rejects_garbage() {
        assert_eq!(decode_uint256_word(""), Err(CodecError::EmptyHex));
        assert!(matches!(
            decode_uint256_word("not hex"),
            Err(CodecError::InvalidNumeral { .. })
        ));
    }

    #[test]
    fn test_decode_uint256_word_rejects_signs_and_separators() {
        for word in [
            format!("-{}", "0".repeat(62) + "1"),
            format!("+{}", "0".repeat(62) + "1"),
            format!("{}1_0", "0".repeat(61)),
            format!("0x{}", "0".repeat(62)),
        ] {
            assert_eq!(word.len(), ABI_WORD_HEX_LEN);
            assert!(
                matches!(
                    decode_uint256_word(&word),
                    Err(CodecError::InvalidNumeral { .. })
                ),
                "accepted {word}"
            );
        }
        assert!(decode_uint256_word("-1").is_err());
        assert!(decode_uint256_word("1_0").is_err());
    }

    #[test]
    fn test_decode_uint256_word_requires_full_word() {
        assert!(matches!(
            decode_uint256_word("ff"),
            Err(CodecError::InvalidNumeral { .. })
        ));
        assert_eq!(
            decode_uint256_word(&"f".repeat(ABI_WORD_HEX_LEN)).unwrap(),
            (BigInt::from(1u8) << 256) - 1
        );
    }

    #[test]
    fn test_function_selector_ids() {
        assert_eq!(function_selector_id(TRANSFER_SELECTOR), "a9059cbb");
        assert_eq!(function_selector_id(BALANCE_OF_SELECTOR), "70a08231");
    }
}
