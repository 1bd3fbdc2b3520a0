//! Arithmetic over [`Decimal`] values.
//!
//! Every operation returns a new value; operands are never mutated. The named
//! methods (`plus`, `minus`, `multiplied_by`, `divided_by`) auto-convert their
//! right-hand side through [`Operand`], so strings, integers and floats work
//! directly. The std operator traits (`+`, `-`, `*`, `/`, unary `-`) are the
//! short forms over the same implementations.
//!
//! Results are deliberately not normalized: a sum keeps the larger operand
//! scale and a product keeps the scale sum, so precision a caller established
//! (for example by rescaling an operand) survives into the result.

use crate::decimal::Decimal;
use crate::error::{DecimalError, DecimalResult};
use crate::parse::Operand;
use crate::rescale::rescaled;
use num_traits::{Signed, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Minimum working precision of division, in fractional digits.
///
/// A quotient is computed at `max(2 × dividend scale, 2 × divisor scale, 20)`
/// fractional digits, so repeating quotients such as `1 / 3` still carry
/// useful precision instead of collapsing to the operand scales.
pub const MIN_DIVISION_SCALE: u64 = 20;

impl Decimal {
    /// Addition. The result carries the larger of the two operand scales.
    ///
    /// # Errors
    ///
    /// Fails only if `rhs` cannot be converted.
    pub fn plus(&self, rhs: impl Into<Operand>) -> DecimalResult<Self> {
        Ok(self.add_decimal(&rhs.into().into_decimal()?))
    }

    /// Subtraction, as addition of the negated right-hand side.
    ///
    /// # Errors
    ///
    /// Fails only if `rhs` cannot be converted.
    pub fn minus(&self, rhs: impl Into<Operand>) -> DecimalResult<Self> {
        Ok(self.add_decimal(&rhs.into().into_decimal()?.negated()))
    }

    /// Multiplication. Mantissas multiply, scales add; always exact.
    ///
    /// # Errors
    ///
    /// Fails only if `rhs` cannot be converted.
    pub fn multiplied_by(&self, rhs: impl Into<Operand>) -> DecimalResult<Self> {
        Ok(self.mul_decimal(&rhs.into().into_decimal()?))
    }

    /// Division at a fixed minimum working precision.
    ///
    /// The dividend is rescaled up (exactly) to
    /// `target = max(2 × self.scale, 2 × divisor.scale, 20)` fractional
    /// digits, its mantissa divided by the divisor mantissa with truncation
    /// toward zero, and the result carries scale `target − divisor.scale` so
    /// that the quotient is the rational value of the operands. Truncation
    /// here is intentional — division discards digits past the working
    /// precision, while rescaling rounds.
    ///
    /// ```rust
    /// use denary::Decimal;
    ///
    /// let d = Decimal::new("123456.789")?;
    /// assert_eq!(d.divided_by(1)?.to_string(), "123456.78900000000000000000");
    /// assert_eq!(d.divided_by(3)?.to_string(), "41152.26300000000000000000");
    /// # Ok::<(), denary::DecimalError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when the divisor mantissa is
    /// zero, whatever its scale; also fails if `rhs` cannot be converted.
    pub fn divided_by(&self, rhs: impl Into<Operand>) -> DecimalResult<Self> {
        self.div_decimal(&rhs.into().into_decimal()?)
    }

    /// The additive inverse, at the same scale.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_parts(-self.mantissa(), self.scale())
    }

    /// The absolute value, at the same scale. Always a fresh value, never an
    /// alias of the receiver.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.mantissa().is_negative() {
            self.negated()
        } else {
            self.clone()
        }
    }

    pub(crate) fn add_decimal(&self, rhs: &Self) -> Self {
        let scale = self.scale().max(rhs.scale());
        let lhs = rescaled(self.mantissa(), self.scale(), scale);
        let rhs = rescaled(rhs.mantissa(), rhs.scale(), scale);
        Self::from_parts(lhs + rhs, scale)
    }

    pub(crate) fn mul_decimal(&self, rhs: &Self) -> Self {
        Self::from_parts(self.mantissa() * rhs.mantissa(), self.scale() + rhs.scale())
    }

    pub(crate) fn div_decimal(&self, rhs: &Self) -> DecimalResult<Self> {
        if rhs.mantissa().is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let target = self
            .scale()
            .max(rhs.scale())
            .saturating_mul(2)
            .max(MIN_DIVISION_SCALE);
        let dividend = rescaled(self.mantissa(), self.scale(), target);
        Ok(Self::from_parts(
            dividend / rhs.mantissa(),
            target - rhs.scale(),
        ))
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        self.add_decimal(&rhs)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        self.add_decimal(rhs)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        self.add_decimal(&rhs.negated())
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        self.add_decimal(&rhs.negated())
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        self.mul_decimal(&rhs)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        self.mul_decimal(rhs)
    }
}

impl Div for Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics on a zero divisor, like primitive integer division. Use
    /// [`Decimal::divided_by`] to handle the zero case as an error.
    fn div(self, rhs: Decimal) -> Decimal {
        match self.div_decimal(&rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Div for &Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics on a zero divisor, like primitive integer division. Use
    /// [`Decimal::divided_by`] to handle the zero case as an error.
    fn div(self, rhs: &Decimal) -> Decimal {
        match self.div_decimal(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated()
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn dec(input: &str) -> Decimal {
        input.parse().unwrap()
    }

    #[test]
    fn test_plus() {
        let start = dec("123456.789");
        assert_eq!(start.plus("0").unwrap(), start);
        assert_eq!(start.plus("345.959443211").unwrap(), dec("123802.748443211"));
        assert_eq!(start.plus(dec("1")).unwrap(), dec("123457.789"));
        assert_eq!(start.plus(2.5).unwrap().to_string(), "123459.289");
    }

    #[test]
    fn test_sum_keeps_larger_operand_scale() {
        let start = dec("123456.789");
        let second = dec("345.959443211").with_scale(42);
        assert_eq!(
            start.plus(&second).unwrap().to_string(),
            "123802.748443211000000000000000000000000000000000"
        );
        // Rescaling the operand down first rounds it, and the sum carries
        // the rounded value
        let second = second.with_scale(1);
        assert_eq!(start.plus(&second).unwrap().to_string(), "123802.789");
    }

    #[test]
    fn test_minus() {
        let start = dec("123456.789");
        assert_eq!(start.minus(0).unwrap().to_string(), "123456.789");
        assert_eq!(start.minus(1).unwrap().to_string(), "123455.789");
        assert_eq!(start.minus(2).unwrap().to_string(), "123454.789");
        assert_eq!(start.minus(-1).unwrap().to_string(), "123457.789");
    }

    #[test]
    fn test_multiplied_by() {
        let start = dec("123456.789");
        assert_eq!(start.multiplied_by(0).unwrap().to_string(), "0");
        assert_eq!(start.multiplied_by(1).unwrap().to_string(), "123456.789");
        assert_eq!(start.multiplied_by(2).unwrap().to_string(), "246913.578");
        assert_eq!(start.multiplied_by(-1).unwrap().to_string(), "-123456.789");
        assert_eq!(start.multiplied_by("1.49").unwrap().to_string(), "183950.61561");
    }

    #[test]
    fn test_multiply_adds_scales_exactly() {
        let product = dec("0.5").multiplied_by("0.25").unwrap();
        assert_eq!(product.mantissa(), &BigInt::from(125));
        assert_eq!(product.scale(), 3);
        assert_eq!(product.to_string(), "0.125");
    }

    #[test]
    fn test_divided_by() {
        let start = dec("123456.789");
        assert_eq!(
            start.divided_by(1).unwrap().to_string(),
            "123456.78900000000000000000"
        );
        assert_eq!(
            start.divided_by(2).unwrap().to_string(),
            "61728.39450000000000000000"
        );
        assert_eq!(
            start.divided_by(-1).unwrap().to_string(),
            "-123456.78900000000000000000"
        );
        assert_eq!(
            start.divided_by("1.49").unwrap().to_string(),
            "82856.905369127516778523"
        );
    }

    #[test]
    fn test_division_by_zero() {
        let start = dec("123456.789");
        assert_eq!(start.divided_by(0), Err(DecimalError::DivisionByZero));
        // A zero mantissa at any scale is still zero
        let zero_at_scale = Decimal::zero().with_scale(5);
        assert_eq!(
            start.divided_by(&zero_at_scale),
            Err(DecimalError::DivisionByZero)
        );
        assert_eq!(start.divided_by("0.000"), Err(DecimalError::DivisionByZero));
    }

    #[test]
    fn test_division_carries_minimum_precision() {
        let third = dec("1").divided_by(3).unwrap();
        assert_eq!(third.to_string(), "0.33333333333333333333");
        assert_eq!(third.scale(), MIN_DIVISION_SCALE);
    }

    #[test]
    fn test_division_result_scale_subtracts_divisor_scale() {
        // target 20, divisor scale 1: the quotient is the rational value
        let quotient = dec("1").divided_by("0.5").unwrap();
        assert_eq!(quotient.to_string(), "2.0000000000000000000");
        assert_eq!(quotient.scale(), 19);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        // -7 / 2 would round to -4 under half-up; truncation keeps -3.5 exact
        assert_eq!(
            dec("-7").divided_by(2).unwrap().to_string(),
            "-3.50000000000000000000"
        );
        // 2 / 3 truncates the repeating tail instead of rounding it up
        assert_eq!(
            dec("2").divided_by(3).unwrap().to_string(),
            "0.66666666666666666666"
        );
    }

    #[test]
    fn test_negated() {
        assert_eq!(dec("123456.789").negated().to_string(), "-123456.789");
        assert_eq!(dec("-123456.789").negated().to_string(), "123456.789");
        let start = dec("123456.789");
        assert_eq!(start.negated().negated(), start);
    }

    #[test]
    fn test_abs() {
        assert_eq!(dec("-123.45").abs().to_string(), "123.45");
        assert_eq!(dec("123.45").abs().to_string(), "123.45");
        assert!(!dec("-123.45").abs().mantissa().is_negative());
        assert_eq!(Decimal::zero().abs(), Decimal::zero());
    }

    #[test]
    fn test_abs_is_a_defensive_copy() {
        let original = dec("123.45");
        let mut copy = original.abs();
        copy.scale_decimals_to(0);
        // Mutating the copy leaves the original untouched
        assert_eq!(original.to_string(), "123.45");
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = dec("123456.789");
        let b = dec("1.49");
        let _ = a.plus(&b).unwrap();
        let _ = a.multiplied_by(&b).unwrap();
        let _ = a.divided_by(&b).unwrap();
        assert_eq!(a.scale(), 3);
        assert_eq!(b.scale(), 2);
    }

    #[test]
    fn test_operator_short_forms() {
        let a = dec("1.5");
        let b = dec("0.25");
        assert_eq!(&a + &b, dec("1.75"));
        assert_eq!(&a - &b, dec("1.25"));
        assert_eq!(&a * &b, dec("0.375"));
        assert_eq!(&a / &b, dec("6"));
        assert_eq!(-&a, dec("-1.5"));
        assert_eq!(a.clone() + b.clone(), dec("1.75"));
        assert_eq!(a.clone() - b.clone(), dec("1.25"));
        assert_eq!(a.clone() * b.clone(), dec("0.375"));
        assert_eq!(a / b, dec("6"));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_operator_division_by_zero_panics() {
        let _ = dec("1") / Decimal::zero();
    }

    #[test]
    fn test_commutativity() {
        let pairs = [("123456.789", "1.49"), ("-0.5", "0.25"), ("0", "42")];
        for (x, y) in pairs {
            let (x, y) = (dec(x), dec(y));
            assert_eq!(x.plus(&y).unwrap(), y.plus(&x).unwrap());
            assert_eq!(x.multiplied_by(&y).unwrap(), y.multiplied_by(&x).unwrap());
        }
    }
}
