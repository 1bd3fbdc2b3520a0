//! Conversion of external inputs into [`Decimal`] values.
//!
//! Everything the crate recognizes as a number funnels through [`Operand`]:
//! native integers, floats, decimal-literal strings (plain or with an `e`
//! exponent suffix), [`BigInt`], raw `{mantissa, scale}` parts, and existing
//! [`Decimal`] values. [`Decimal::new`](crate::Decimal::new) and the
//! right-hand sides of the arithmetic methods all take `impl Into<Operand>`.

use crate::decimal::{Decimal, RawParts};
use crate::error::{DecimalError, DecimalResult};
use crate::rescale::ten_to_the;
use num_bigint::BigInt;
use std::str::FromStr;

/// An input the parser recognizes.
///
/// Constructed through the `From` impls below; converted with
/// [`into_decimal`](Self::into_decimal), which applies the string grammar,
/// rejects non-finite floats, validates raw parts, and normalizes the result.
/// An existing [`Decimal`] passes through with its scale preserved — trailing
/// zeros a caller established deliberately (for example by rescaling) are not
/// stripped again.
#[derive(Debug, Clone)]
pub enum Operand {
    Int(i128),
    Big(BigInt),
    Float(f64),
    Literal(String),
    Raw(RawParts),
    Decimal(Decimal),
}

impl Operand {
    /// Convert into a [`Decimal`].
    ///
    /// # Errors
    ///
    /// - [`DecimalError::InvalidNumber`] for a malformed literal
    /// - [`DecimalError::UnsupportedInput`] for a NaN or infinite float
    /// - [`DecimalError::NegativeScale`] for raw parts with a negative scale
    pub fn into_decimal(self) -> DecimalResult<Decimal> {
        match self {
            Self::Int(value) => Ok(Decimal::from_parts(BigInt::from(value), 0)),
            Self::Big(mantissa) => Ok(Decimal::from_parts(mantissa, 0)),
            Self::Float(value) => parse_float(value),
            Self::Literal(literal) => Ok(parse_literal(&literal)?.trimmed()),
            Self::Raw(parts) => {
                if parts.scale < 0 {
                    return Err(DecimalError::NegativeScale(parts.scale));
                }
                let scale = parts.scale.unsigned_abs();
                Ok(Decimal::from_parts(parts.mantissa, scale).trimmed())
            }
            Self::Decimal(value) => Ok(value),
        }
    }
}

/// Parse a decimal literal, optionally carrying an exponent suffix.
///
/// `"23e5"` splits into the mantissa literal `"23"` and exponent `5`. When the
/// exponent exceeds the literal's fraction-digit count the stripped mantissa
/// is multiplied up and the scale is zero; otherwise the scale is the count
/// minus the exponent. The caller is responsible for trimming.
pub(crate) fn parse_literal(input: &str) -> DecimalResult<Decimal> {
    let input = input.trim();
    let (literal, exponent) = split_exponent(input)?;
    let (integer_part, fraction_part) = split_fraction(input, literal)?;

    let mut digits = String::with_capacity(integer_part.len() + fraction_part.len());
    digits.push_str(integer_part);
    digits.push_str(fraction_part);

    // BigInt's digit parser validates sign placement and rejects anything
    // that is not an optionally signed digit run, including the empty string.
    let mantissa = BigInt::from_str(&digits)
        .map_err(|_| DecimalError::InvalidNumber(input.to_string()))?;

    let fraction_digits = fraction_part.len() as i64;
    if exponent > fraction_digits {
        let shift = (exponent - fraction_digits).unsigned_abs();
        Ok(Decimal::from_parts(mantissa * ten_to_the(shift), 0))
    } else {
        let scale = fraction_digits
            .checked_sub(exponent)
            .ok_or_else(|| DecimalError::InvalidNumber(input.to_string()))?;
        Ok(Decimal::from_parts(mantissa, scale.unsigned_abs()))
    }
}

/// Split off an `e`/`E` exponent suffix. At most one marker is allowed.
fn split_exponent(input: &str) -> DecimalResult<(&str, i64)> {
    match input.find(['e', 'E']) {
        None => Ok((input, 0)),
        Some(pos) => {
            let literal = &input[..pos];
            let suffix = &input[pos + 1..];
            if suffix.contains(['e', 'E']) {
                return Err(DecimalError::InvalidNumber(input.to_string()));
            }
            let exponent = suffix
                .parse::<i64>()
                .map_err(|_| DecimalError::InvalidNumber(input.to_string()))?;
            Ok((literal, exponent))
        }
    }
}

/// Split a literal at its decimal point. At most one point is allowed.
fn split_fraction<'a>(input: &str, literal: &'a str) -> DecimalResult<(&'a str, &'a str)> {
    match literal.find('.') {
        None => Ok((literal, "")),
        Some(pos) => {
            let fraction = &literal[pos + 1..];
            if fraction.contains('.') {
                return Err(DecimalError::InvalidNumber(input.to_string()));
            }
            Ok((&literal[..pos], fraction))
        }
    }
}

/// Convert a float through its shortest round-trip decimal text.
///
/// Rust's `Display` for floats never produces exponent notation, so the text
/// feeds straight into the literal grammar. The binary representation of the
/// float is what gets converted: a value like `0.1` arrives as the nearest
/// `f64`, and values that are not exact binary fractions carry that
/// representational error into the result. This is an accepted limitation of
/// float construction, not of the decimal type — parse from a string when the
/// exact digits matter.
fn parse_float(value: f64) -> DecimalResult<Decimal> {
    if !value.is_finite() {
        return Err(DecimalError::UnsupportedInput(value.to_string()));
    }
    Ok(parse_literal(&value.to_string())?.trimmed())
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&Decimal> for Operand {
    fn from(value: &Decimal) -> Self {
        Self::Decimal(value.clone())
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Self::Big(value)
    }
}

impl From<RawParts> for Operand {
    fn from(value: RawParts) -> Self {
        Self::Raw(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i128> for Operand {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

impl From<u128> for Operand {
    fn from(value: u128) -> Self {
        Self::Big(BigInt::from(value))
    }
}

// Smaller integer types — widen to i128
macro_rules! operand_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Self::Int(i128::from(value))
                }
            }
        )*
    };
}

operand_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn parts(input: &str) -> (BigInt, u64) {
        let d = parse_literal(input).unwrap();
        (d.mantissa().clone(), d.scale())
    }

    #[test]
    fn test_plain_literals() {
        assert_eq!(parts("1234"), (BigInt::from(1234), 0));
        assert_eq!(parts("1234.56"), (BigInt::from(123_456), 2));
        assert_eq!(parts("-1234.56"), (BigInt::from(-123_456), 2));
        assert_eq!(parts("+1234.56"), (BigInt::from(123_456), 2));
        assert_eq!(parts("0.12345678901234"), (BigInt::from(12_345_678_901_234i64), 14));
    }

    #[test]
    fn test_exponent_folds_into_mantissa_or_scale() {
        // Exponent beyond the fraction digits multiplies up, scale 0
        assert_eq!(parts("23e5"), (BigInt::from(2_300_000), 0));
        assert_eq!(parts("23.6e5"), (BigInt::from(2_360_000), 0));
        // Exponent within the fraction digits shrinks the scale
        assert_eq!(parts("2.5e1"), (BigInt::from(25), 0));
        // Negative exponent grows the scale
        assert_eq!(parts("1.5e-3"), (BigInt::from(15), 4));
        assert_eq!(parts("23E5"), (BigInt::from(2_300_000), 0));
    }

    #[test]
    fn test_very_long_literal() {
        let (mantissa, scale) =
            parts("12345678901234567890123456789.06589426959512345678901234567890123");
        assert_eq!(
            mantissa,
            "1234567890123456789012345678906589426959512345678901234567890123"
                .parse::<BigInt>()
                .unwrap()
        );
        assert_eq!(scale, 35);
    }

    #[test]
    fn test_malformed_literals_fail() {
        let cases = [
            "", ".", "+", "-", "-.", "woiejoif23423", "2.5.626", "25e6e9", "1.2e", "12_000",
            "1.2.3", "4e5.5", "- 5",
        ];
        for input in cases {
            assert!(
                matches!(parse_literal(input), Err(DecimalError::InvalidNumber(_))),
                "expected InvalidNumber for {input:?}"
            );
        }
    }

    #[test]
    fn test_float_operand() {
        let d = Operand::from(12.34).into_decimal().unwrap();
        assert_eq!(d.mantissa(), &BigInt::from(1234));
        assert_eq!(d.scale(), 2);

        let d = Operand::from(-0.5).into_decimal().unwrap();
        assert_eq!(d.mantissa(), &BigInt::from(-5));
        assert_eq!(d.scale(), 1);

        let d = Operand::from(0.0).into_decimal().unwrap();
        assert!(d.mantissa().is_zero());
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_non_finite_floats_are_unsupported() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    Operand::from(value).into_decimal(),
                    Err(DecimalError::UnsupportedInput(_))
                ),
                "expected UnsupportedInput for {value}"
            );
        }
    }

    #[test]
    fn test_raw_parts_negative_scale_fails() {
        let parts = RawParts {
            mantissa: BigInt::from(123),
            scale: -2,
        };
        assert_eq!(
            Operand::from(parts).into_decimal(),
            Err(DecimalError::NegativeScale(-2))
        );
    }

    #[test]
    fn test_literal_operand_is_trimmed() {
        let d = Operand::from("-12345600.00000").into_decimal().unwrap();
        assert_eq!(d.mantissa(), &BigInt::from(-12_345_600));
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_decimal_operand_keeps_scale() {
        let padded = Decimal::new("0.5").unwrap().with_scale(10);
        let through = Operand::from(&padded).into_decimal().unwrap();
        assert_eq!(through.scale(), 10);
    }
}
