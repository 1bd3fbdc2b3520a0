//! Scale changes and normalization.
//!
//! A [`Decimal`](crate::Decimal) stores its value as `mantissa × 10^(-scale)`.
//! Moving the scale up multiplies the mantissa by a power of ten and is always
//! exact; moving it down divides with round-half-up-away-from-zero. This is
//! the single rounding policy in the crate — every place a scale must shrink
//! goes through [`rescaled`].

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

/// Compute 10^`pow` as a [`BigInt`].
///
/// Small powers stay in `u64` arithmetic; anything at or above 10^20 falls
/// back to big-integer exponentiation.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn ten_to_the(pow: u64) -> BigInt {
    if pow < 20 {
        BigInt::from(10u64.pow(pow as u32))
    } else {
        num_traits::pow(BigInt::from(10), pow as usize)
    }
}

/// Return `mantissa` re-expressed at `target` scale.
///
/// - `target > scale`: multiply by 10^(target − scale). Exact.
/// - `target < scale`: truncating division by 10^(scale − target), then
///   round-half-up-away-from-zero — when twice the absolute remainder reaches
///   the divisor, the quotient magnitude is bumped by one in the mantissa's
///   sign direction.
/// - `target == scale`: clone.
pub(crate) fn rescaled(mantissa: &BigInt, scale: u64, target: u64) -> BigInt {
    match target.cmp(&scale) {
        Ordering::Equal => mantissa.clone(),
        Ordering::Greater => mantissa * ten_to_the(target - scale),
        Ordering::Less => {
            let divisor = ten_to_the(scale - target);
            let quotient = mantissa / &divisor;
            let remainder = mantissa - &quotient * &divisor;
            if remainder.abs() * 2 >= divisor {
                if mantissa.is_negative() {
                    quotient - 1
                } else {
                    quotient + 1
                }
            } else {
                quotient
            }
        }
    }
}

/// Count trailing zero digits of `mantissa` in base ten.
///
/// Zero has no trailing zeros by convention; callers clamp the count to the
/// current scale before trimming.
pub(crate) fn trailing_zeros(mantissa: &BigInt) -> u64 {
    if mantissa.is_zero() {
        return 0;
    }
    let digits = mantissa.magnitude().to_str_radix(10);
    digits.bytes().rev().take_while(|&b| b == b'0').count() as u64
}
