use crate::decimal::{pow10, ScaledDecimal};
use crate::error::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::Zero;

/// Division always carries at least this many extra significant digits
/// beyond the digit-length difference of the operands, so near-zero and
/// coarse quotients keep their significance.
const DIV_PRECISION_FLOOR: i64 = 6;

/// Conversion of an operand into a [`ScaledDecimal`].
///
/// Every binary operation accepts another decimal, a string, or a native
/// number. Strings and floats run through the same parser as direct
/// construction, so a malformed operand fails with the same
/// [`InvalidFormat`](DecimalError::InvalidFormat) — there is no silent
/// fallback.
pub trait ToDecimal {
    /// Convert into a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidFormat`] if the operand does not parse
    /// as a decimal.
    fn to_decimal(self) -> DecimalResult<ScaledDecimal>;
}

impl ToDecimal for ScaledDecimal {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        Ok(self)
    }
}

impl ToDecimal for &ScaledDecimal {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        Ok(self.clone())
    }
}

impl ToDecimal for &str {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        self.parse()
    }
}

impl ToDecimal for &String {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        self.parse()
    }
}

impl ToDecimal for String {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        self.parse()
    }
}

impl ToDecimal for f64 {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        ScaledDecimal::try_from(self)
    }
}

impl ToDecimal for f32 {
    fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
        ScaledDecimal::try_from(self)
    }
}

macro_rules! to_decimal_from_int {
    ($($t:ty),*) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(self) -> DecimalResult<ScaledDecimal> {
                    Ok(ScaledDecimal::from(self))
                }
            }
        )*
    };
}

to_decimal_from_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// ============================================================================
// Arithmetic
// ============================================================================

impl ScaledDecimal {
    /// Exact addition.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidFormat`] if the operand does not parse.
    pub fn add(&self, rhs: impl ToDecimal) -> DecimalResult<Self> {
        Ok(self.add_exact(&rhs.to_decimal()?))
    }

    /// Exact subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidFormat`] if the operand does not parse.
    pub fn sub(&self, rhs: impl ToDecimal) -> DecimalResult<Self> {
        Ok(self.sub_exact(&rhs.to_decimal()?))
    }

    /// Exact multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidFormat`] if the operand does not parse.
    pub fn mul(&self, rhs: impl ToDecimal) -> DecimalResult<Self> {
        Ok(self.mul_exact(&rhs.to_decimal()?))
    }

    /// Truncating division at a digit-length-derived working precision.
    ///
    /// The working precision is the difference between the dividend's digit
    /// count and the divisor's integer-part digit count, floored at six extra
    /// significant digits. The scaled quotient truncates toward zero; this is
    /// a deliberate approximation, not correctly-rounded decimal division.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] for a zero divisor and
    /// [`DecimalError::InvalidFormat`] if the operand does not parse.
    pub fn div(&self, rhs: impl ToDecimal) -> DecimalResult<Self> {
        self.div_truncated(&rhs.to_decimal()?)
    }

    /// Align to the common scale, then add the aligned unscaled values
    fn add_exact(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.align(rhs);
        Self::from_parts(lhs + rhs, scale)
    }

    fn sub_exact(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.align(rhs);
        Self::from_parts(lhs - rhs, scale)
    }

    /// Multiply unscaled values; scales add
    fn mul_exact(&self, rhs: &Self) -> Self {
        Self::from_parts(self.unscaled() * rhs.unscaled(), self.scale() + rhs.scale())
    }

    fn div_truncated(&self, rhs: &Self) -> DecimalResult<Self> {
        if rhs.unscaled().is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        let len_dividend = digit_len(self.unscaled());
        // Subtracting the divisor's scale approximates its integer-part
        // digit count; it goes negative for values below one
        let len_divisor = digit_len(rhs.unscaled()) - i64::from(rhs.scale());

        let precision = (len_dividend - len_divisor).max(DIV_PRECISION_FLOOR);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let numerator = self.unscaled() * pow10(precision as u32);
        // BigInt division truncates toward zero
        let quotient = numerator / rhs.unscaled();

        let scale = i64::from(self.scale()) + precision - i64::from(rhs.scale());
        if scale < 0 {
            // A sub-one divisor with a long fractional tail can push the
            // nominal scale negative; shift the quotient up instead so the
            // represented value is unchanged and the scale stays at zero
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let shifted = quotient * pow10((-scale) as u32);
            Ok(Self::from_parts(shifted, 0))
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Self::from_parts(quotient, scale as u32))
        }
    }
}

/// Decimal digit count of the magnitude (zero counts as one digit)
fn digit_len(value: &BigInt) -> i64 {
    value.magnitude().to_string().len() as i64
}

// ============================================================================
// Operator sugar for the infallible decimal-decimal forms
// ============================================================================

// Division stays method-only: it must surface DivisionByZero.

impl std::ops::Add for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_exact(rhs)
    }
}

impl std::ops::Sub for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_exact(rhs)
    }
}

impl std::ops::Mul for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_exact(rhs)
    }
}

impl std::ops::Add for ScaledDecimal {
    type Output = ScaledDecimal;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add_exact(&rhs)
    }
}

impl std::ops::Sub for ScaledDecimal {
    type Output = ScaledDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub_exact(&rhs)
    }
}

impl std::ops::Mul for ScaledDecimal {
    type Output = ScaledDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul_exact(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ScaledDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_aligns_scales() {
        let sum = dec("1.2").add("3.45").unwrap();
        assert_eq!(sum.scale(), 2);
        assert_eq!(sum.to_string(), "4.65");

        // Result keeps the max scale even when a shorter form exists
        let sum = dec("0.75").add("0.75").unwrap();
        assert_eq!(sum.scale(), 2);
        assert_eq!(sum.unscaled(), &BigInt::from(150));
    }

    #[test]
    fn test_add_identity() {
        for s in ["0", "1.23", "-103.2", "0.0001", "-0.5"] {
            let x = dec(s);
            assert_eq!(x.add("0").unwrap().to_string(), x.to_string());
        }
    }

    #[test]
    fn test_add_commutes() {
        let a = dec("1.23");
        let b = dec("-45.6789");
        assert_eq!(
            a.add(&b).unwrap().to_string(),
            b.add(&a).unwrap().to_string()
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!(dec("5.79").sub("4.56").unwrap().to_string(), "1.23");
        assert_eq!(dec("1").sub("1.5").unwrap().to_string(), "-0.5");
        assert_eq!(dec("-1").sub("-1").unwrap().to_string(), "0");
    }

    #[test]
    fn test_mul_scales_add() {
        let product = dec("1.23").mul("3.21").unwrap();
        assert_eq!(product.scale(), 4);
        assert_eq!(product.to_string(), "3.9483");
    }

    #[test]
    fn test_mul_integer_exactness() {
        let a = 123_456_789_i64;
        let b = 987_654_321_i64;
        let product = ScaledDecimal::from(a).mul(b).unwrap();
        assert_eq!(product.to_string(), (i128::from(a) * i128::from(b)).to_string());
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(dec("-1.5").mul("2").unwrap().to_string(), "-3");
        assert_eq!(dec("-1.5").mul("-2").unwrap().to_string(), "3");
    }

    #[test]
    fn test_div_basic() {
        // 3.9503 / 3.21: precision max(6, 5 - 1) = 6,
        // 39503000000 / 321 = 123062305 at scale 4 + 6 - 2
        let q = dec("3.9503").div("3.21").unwrap();
        assert_eq!(q.scale(), 8);
        assert_eq!(q.to_string(), "1.23062305");
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let q = dec("-7").div("2").unwrap();
        assert_eq!(q.to_string(), "-3.5");

        // 1 / 3 truncates, never rounds up
        let q = dec("1").div("3").unwrap();
        assert_eq!(q.to_string(), "0.333333");

        let q = dec("-1").div("3").unwrap();
        assert_eq!(q.to_string(), "-0.333333");
    }

    #[test]
    fn test_div_precision_floor() {
        // Dividend shorter than the divisor's integer part: the floor of six
        // extra digits applies and the result scale is s1 + 6 - s2
        let a = dec("1.5");
        let b = dec("123.45");
        let q = a.div(&b).unwrap();
        assert_eq!(q.scale(), 1 + 6 - 2);
        assert_eq!(q.to_string(), "0.01215");
    }

    #[test]
    fn test_div_scale_floors_at_zero() {
        // Divisor far below one: nominal scale 0 + 9 - 11 would be negative
        let q = dec("1").div("0.00000000123").unwrap();
        assert_eq!(q.scale(), 0);
        assert_eq!(q.to_string(), "813008100");
    }

    #[test]
    fn test_div_zero_dividend() {
        let q = dec("0").div("5.5").unwrap();
        assert!(q.is_zero());
        assert_eq!(q.to_string(), "0");
    }

    #[test]
    fn test_div_by_zero() {
        for dividend in ["0", "1", "-42.5"] {
            for divisor in ["0", "0.0", "-0.00"] {
                let result = dec(dividend).div(divisor);
                assert_eq!(
                    result,
                    Err(DecimalError::DivisionByZero),
                    "{dividend} / {divisor}"
                );
            }
        }
    }

    #[test]
    fn test_operand_coercion() {
        let x = dec("1.5");
        assert_eq!(x.add("2.5").unwrap().to_string(), "4");
        assert_eq!(x.add(2.5_f64).unwrap().to_string(), "4");
        assert_eq!(x.add(2_i64).unwrap().to_string(), "3.5");
        assert_eq!(x.add(String::from("0.5")).unwrap().to_string(), "2");
        assert_eq!(x.add(&dec("0.25")).unwrap().to_string(), "1.75");
    }

    #[test]
    fn test_operand_coercion_rejects_malformed() {
        let x = dec("1");
        for op in ["", "1.2.3", "abc", "--1"] {
            for result in [x.add(op), x.sub(op), x.mul(op), x.div(op)] {
                assert!(
                    matches!(result, Err(DecimalError::InvalidFormat(_))),
                    "operand {op:?} should be rejected"
                );
            }
        }
        assert!(matches!(
            x.mul(f64::NAN),
            Err(DecimalError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_operators() {
        let a = dec("1.25");
        let b = dec("0.75");
        assert_eq!((&a + &b).to_string(), "2");
        assert_eq!((&a - &b).to_string(), "0.5");
        assert_eq!((&a * &b).to_string(), "0.9375");
        assert_eq!((a.clone() + b.clone()).to_string(), "2");
        assert_eq!((a.clone() - b.clone()).to_string(), "0.5");
        assert_eq!((a * b).to_string(), "0.9375");
    }

    #[test]
    fn test_operations_leave_operands_untouched() {
        let a = dec("1.23");
        let b = dec("4.56");
        let _ = a.add(&b).unwrap();
        let _ = a.div(&b).unwrap();
        assert_eq!(a.to_string(), "1.23");
        assert_eq!(b.to_string(), "4.56");
    }
}
