use crate::error::{DecimalError, DecimalResult};
use crate::parse::{parse_literal, Operand};
use crate::rescale::{rescaled, trailing_zeros};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Raw `{mantissa, scale}` parts for constructing a [`Decimal`] directly.
///
/// The scale is signed here so that a negative input can be rejected with
/// [`DecimalError::NegativeScale`](crate::DecimalError::NegativeScale) instead
/// of being silently reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParts {
    pub mantissa: BigInt,
    pub scale: i64,
}

/// An arbitrary-precision fixed-point decimal number.
///
/// The value is `mantissa × 10^(-scale)`: an arbitrary-precision signed
/// integer mantissa holding every significant digit, and a non-negative scale
/// counting how far the decimal point is shifted left. `1234.56` is stored as
/// mantissa `123456`, scale `2`.
///
/// Two decimals with different `(mantissa, scale)` pairs can represent the
/// same value; equality and ordering are defined over the value, not the
/// pair, so `Decimal::new("123456.789000")? == Decimal::new("123456.789")?`.
/// Because equal values can have unequal representations, [`Decimal`] does
/// not implement `Hash`.
///
/// Construction normalizes to minimal scale (trailing zero digits trimmed).
/// Arithmetic never trims and never mutates its operands — every operation
/// returns a new value, and the scale of a result follows directly from the
/// scales of the inputs (a sum keeps the larger operand scale, a product adds
/// the scales). The only in-place mutators are [`scale_decimals_to`] and
/// [`trim_trailing_zeros`], offered as explicit escape hatches; concurrent
/// in-place mutation of one instance needs external synchronization.
///
/// [`scale_decimals_to`]: Self::scale_decimals_to
/// [`trim_trailing_zeros`]: Self::trim_trailing_zeros
#[derive(Debug, Clone, Default)]
pub struct Decimal {
    mantissa: BigInt,
    scale: u64,
}

impl Decimal {
    /// Construct from anything the parser recognizes.
    ///
    /// Accepts native integers, floats, decimal-literal strings (plain or
    /// exponent form such as `"23e5"`), [`BigInt`], [`RawParts`], and
    /// existing [`Decimal`] values.
    ///
    /// ```rust
    /// use denary::Decimal;
    ///
    /// let from_str = Decimal::new("1234.56")?;
    /// let from_int = Decimal::new(1234)?;
    /// assert_eq!(from_str.scale(), 2);
    /// assert_eq!(from_int.scale(), 0);
    /// # Ok::<(), denary::DecimalError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidNumber`] for a malformed literal,
    /// [`DecimalError::UnsupportedInput`] for a non-finite float, and
    /// [`DecimalError::NegativeScale`] for raw parts with a negative scale.
    pub fn new(value: impl Into<Operand>) -> DecimalResult<Self> {
        value.into().into_decimal()
    }

    /// Construct from raw `{mantissa, scale}` parts.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NegativeScale`] if `parts.scale < 0`.
    pub fn from_raw(parts: RawParts) -> DecimalResult<Self> {
        Self::new(parts)
    }

    /// The decimal zero (mantissa 0, scale 0).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            scale: 0,
        }
    }

    pub(crate) fn from_parts(mantissa: BigInt, scale: u64) -> Self {
        Self { mantissa, scale }
    }

    /// The unscaled significant digits, including sign.
    #[must_use]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// How far the decimal point is shifted left from the mantissa.
    #[must_use]
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// Consume and return the `(mantissa, scale)` pair.
    #[must_use]
    pub fn into_parts(self) -> (BigInt, u64) {
        (self.mantissa, self.scale)
    }

    /// Return this value re-expressed at `target` scale.
    ///
    /// Scaling up is exact. Scaling down rounds half-up-away-from-zero, so
    /// information past the target scale is lost:
    ///
    /// ```rust
    /// use denary::Decimal;
    ///
    /// let d = Decimal::new("12345678.1468")?;
    /// assert_eq!(d.with_scale(3).to_string(), "12345678.147");
    /// assert_eq!(d.with_scale(6).to_string(), "12345678.146800");
    /// # Ok::<(), denary::DecimalError>(())
    /// ```
    #[must_use]
    pub fn with_scale(&self, target: u64) -> Self {
        Self {
            mantissa: rescaled(&self.mantissa, self.scale, target),
            scale: target,
        }
    }

    /// Rescale in place. Escape-hatch variant of [`with_scale`](Self::with_scale);
    /// arithmetic never mutates, so this is the one way an existing instance
    /// changes after construction.
    pub fn scale_decimals_to(&mut self, target: u64) {
        self.mantissa = rescaled(&self.mantissa, self.scale, target);
        self.scale = target;
    }

    /// Return this value at minimal scale, with trailing zero digits removed
    /// from the mantissa.
    ///
    /// Always exact: only powers of ten that evenly divide the mantissa are
    /// removed, so the rounding branch of the rescaler can never fire.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        if self.mantissa.is_zero() {
            return Self::zero();
        }
        let removable = trailing_zeros(&self.mantissa).min(self.scale);
        if removable == 0 {
            return self.clone();
        }
        self.with_scale(self.scale - removable)
    }

    /// Trim trailing zeros in place. Escape-hatch variant of [`trimmed`](Self::trimmed).
    pub fn trim_trailing_zeros(&mut self) {
        *self = self.trimmed();
    }

    /// Three-way comparison against anything the parser recognizes.
    ///
    /// Equivalent to `Ok(self.cmp(&Decimal::new(rhs)?))`; the `Ord`, `PartialOrd`,
    /// `PartialEq` and `Eq` impls are all derived from the same comparison, so
    /// `==`, `<`, `<=`, `>` and `>=` agree with this result by construction.
    ///
    /// # Errors
    ///
    /// Fails only if `rhs` cannot be converted.
    pub fn compared_to(&self, rhs: impl Into<Operand>) -> DecimalResult<Ordering> {
        Ok(self.cmp(&rhs.into().into_decimal()?))
    }

    /// Render with exactly `digits` fractional digits, rounding half-up if
    /// the value carries more precision than requested.
    ///
    /// ```rust
    /// use denary::Decimal;
    ///
    /// let d = Decimal::new("123456.789")?;
    /// assert_eq!(d.to_fixed(2), "123456.79");
    /// assert_eq!(d.to_fixed(6), "123456.789000");
    /// # Ok::<(), denary::DecimalError>(())
    /// ```
    #[must_use]
    pub fn to_fixed(&self, digits: u64) -> String {
        self.with_scale(digits).to_string()
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_literal(s)?.trimmed())
    }
}

/// Fixed-point rendering, never exponent notation.
///
/// A zero mantissa renders as `"0"` whatever its scale. Values below one get
/// a leading `"0."` and zero padding; a pure integer renders its digit string
/// unchanged; everything else splits the digit string at the decimal point.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa.is_zero() {
            return f.write_str("0");
        }
        if self.mantissa.is_negative() {
            f.write_str("-")?;
        }

        let digits = self.mantissa.magnitude().to_str_radix(10);
        let Ok(scale) = usize::try_from(self.scale) else {
            return Err(fmt::Error);
        };
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() <= scale {
            // Value below one: zero-pad between the point and the digits
            f.write_str("0.")?;
            for _ in 0..scale - digits.len() {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        } else {
            let (integer, fraction) = digits.split_at(digits.len() - scale);
            f.write_str(integer)?;
            f.write_str(".")?;
            f.write_str(fraction)
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total ordering over values, independent of internal scale.
///
/// Both mantissas are brought to the larger of the two scales (exact, scale
/// only grows) and compared as signed integers.
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        let lhs = rescaled(&self.mantissa, self.scale, scale);
        let rhs = rescaled(&other.mantissa, other.scale, scale);
        lhs.cmp(&rhs)
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::from_parts(value, 0)
    }
}

impl From<i128> for Decimal {
    fn from(value: i128) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

impl From<u128> for Decimal {
    fn from(value: u128) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

// Smaller integer types — widen to i128
macro_rules! decimal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self::from(i128::from(value))
                }
            }
        )*
    };
}

decimal_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    /// Convert through the float's shortest round-trip decimal text.
    ///
    /// The float's binary representation is what gets converted; values that
    /// are not exact binary fractions carry that representational error into
    /// the result. Parse from a string when the exact digits matter.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::UnsupportedInput`] for NaN and infinities,
    /// which have no fixed-point representation.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Operand::from(value).into_decimal()
    }
}

impl TryFrom<f32> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}
