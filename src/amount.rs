// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversions between display amounts and minimum units
//!
//! All arithmetic is done on [`BigInt`] and [`BigDecimal`]; floats only
//! appear at the edges ([`native_to_display`], [`amount_from_f64`]). Scaling
//! by `10^decimals` is a shift of the decimal exponent, so no rounding ever
//! happens except the explicit floor when converting to minimum units.
//!
//! # Examples
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use num_bigint::BigInt;
//! use std::str::FromStr;
//! use tron_trc20::{amount, TokenDecimals};
//!
//! let display = BigDecimal::from_str("1.5").unwrap();
//! let min_units = amount::to_min_unit_by_decimals(&display, TokenDecimals::new(6)).unwrap();
//! assert_eq!(min_units, BigInt::from(1_500_000));
//!
//! let back = amount::to_display_amount(&min_units, TokenDecimals::new(6));
//! assert_eq!(back, display);
//! ```

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::config::constants::{NATIVE_DISPLAY_SCALE, TRX_DECIMALS};
use crate::errors::CodecError;
use crate::types::tokens::TokenDecimals;

/// Convert sun to a TRX display value
///
/// Divides by 10^6 exactly, keeps at most 8 fractional digits, then converts
/// to `f64` for display.
pub fn native_to_display(sun: i64) -> f64 {
    let display = to_display_amount(&BigInt::from(sun), TokenDecimals::new(TRX_DECIMALS))
        .with_scale(NATIVE_DISPLAY_SCALE);
    // Any i64 quotient with 8 fractional digits is well inside f64 range
    display.to_f64().unwrap_or_default()
}

/// Convert a TRX display amount to sun, truncating any fraction below one sun
pub fn display_to_native(amount: &BigDecimal) -> Result<i64, CodecError> {
    let sun = to_min_unit_by_decimals(amount, TokenDecimals::new(TRX_DECIMALS))?;
    sun.to_i64().ok_or_else(|| CodecError::overflow(&sun, 63))
}

/// Convert minimum units to a display amount: `min_units / 10^decimals`
pub fn to_display_amount(min_units: &BigInt, decimals: TokenDecimals) -> BigDecimal {
    BigDecimal::new(min_units.clone(), decimals.as_u8() as i64)
}

/// Convert a display amount to minimum units: `floor(amount × 10^decimals)`
///
/// Negative amounts are rejected; a transfer or balance is never negative.
pub fn to_min_unit_by_decimals(
    amount: &BigDecimal,
    decimals: TokenDecimals,
) -> Result<BigInt, CodecError> {
    let (digits, scale) = amount.as_bigint_and_exponent();
    if digits.sign() == Sign::Minus {
        return Err(CodecError::negative(scientific(&digits, scale)));
    }
    if digits.is_zero() {
        return Ok(BigInt::zero());
    }

    // amount = digits × 10^-scale, so amount × 10^decimals = digits × 10^(decimals - scale)
    let shift = i64::from(decimals.as_u8())
        .checked_sub(scale)
        .ok_or_else(|| CodecError::overflow(scientific(&digits, scale), UINT256_BITS))?;
    if shift >= 0 {
        let up = shift.unsigned_abs();
        if up >= UINT256_MAX_DIGITS {
            return Err(CodecError::overflow(
                scientific(&digits, scale),
                UINT256_BITS,
            ));
        }
        Ok(digits * pow10(up))
    } else {
        let down = shift.unsigned_abs();
        // digits < 2^bits <= 10^bits, so dividing by 10^bits or more leaves nothing
        if down >= digits.bits() {
            return Ok(BigInt::zero());
        }
        // Non-negative, so truncating division is the floor
        Ok(digits / pow10(down))
    }
}

/// Parse a decimal numeral such as `"1.5"` or `"1e-6"`
pub fn parse_amount(s: &str) -> Result<BigDecimal, CodecError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CodecError::invalid_numeral(s));
    }
    BigDecimal::from_str(trimmed).map_err(|_| CodecError::invalid_numeral(s))
}

/// Convert a float to an exact decimal via its shortest round-trip form
///
/// `1.1_f64` becomes exactly `1.1`, not the binary approximation
/// `1.100000000000000088817841970012523...`.
pub fn amount_from_f64(value: f64) -> Result<BigDecimal, CodecError> {
    if !value.is_finite() {
        return Err(CodecError::NonFiniteAmount);
    }
    parse_amount(&value.to_string())
}

/// Decimal digits in 2^256 - 1; a non-zero amount scaled up by this many
/// powers of ten cannot fit a uint256
const UINT256_MAX_DIGITS: u64 = 78;

const UINT256_BITS: u32 = 256;

// Renders without expanding the exponent, which may be near i64::MAX
fn scientific(digits: &BigInt, scale: i64) -> String {
    format!("{digits}e{}", -i128::from(scale))
}

fn pow10(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}
