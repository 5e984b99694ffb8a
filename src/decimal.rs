use crate::error::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::ops::Neg;

/// An exact decimal number stored as an unscaled arbitrary-precision integer
/// plus an explicit decimal-point position.
///
/// The represented value is `unscaled / 10^scale`, with no rounding at rest.
/// `ScaledDecimal` is an immutable value type: every operation returns a new
/// instance and nothing mutates a value after construction, so instances can
/// be shared freely across threads.
///
/// Two instances with different scales may denote the same number (150 at
/// scale 2 and 15 at scale 1 are both 1.5). The in-memory form is not forced
/// into a single canonical scale; [`Display`](std::fmt::Display) output is
/// canonical instead (no trailing fractional zeros, no dangling decimal
/// point), and comparison is by represented value, so `1.50 == 1.5`.
///
/// # Example
///
/// ```
/// use scaledec::ScaledDecimal;
///
/// let price: ScaledDecimal = "1.23".parse().unwrap();
/// let total = price.add("4.56").unwrap();
/// assert_eq!(total.to_string(), "5.79");
/// ```
#[derive(Debug, Clone)]
pub struct ScaledDecimal {
    unscaled: BigInt,
    scale: u32,
}

/// `10^exp` as a [`BigInt`]
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

impl ScaledDecimal {
    /// Build a value from its final fields.
    ///
    /// Crate-internal on purpose: the public constructors are parsing and the
    /// numeric conversions, which always hand over fully-computed fields.
    /// There is no incomplete state to observe.
    pub(crate) const fn from_parts(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// Zero at scale 0
    #[must_use]
    pub fn zero() -> Self {
        Self::from_parts(BigInt::ZERO, 0)
    }

    /// The unscaled integer magnitude (value × `10^scale`)
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of low-order digits of the unscaled value that are fractional
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Check if the represented value is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if the represented value is negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Absolute value, keeping the scale
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.unscaled.abs(), self.scale)
    }

    /// Align `self` and `other` to their common (maximum) scale.
    ///
    /// Scaling up by a power of ten is lossless for integers, so both
    /// returned unscaled values represent the originals exactly.
    pub(crate) fn align(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        let lhs = &self.unscaled * pow10(scale - self.scale);
        let rhs = &other.unscaled * pow10(scale - other.scale);
        (lhs, rhs, scale)
    }
}

// ============================================================================
// Comparison — by represented value, not by representation
// ============================================================================

impl PartialEq for ScaledDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScaledDecimal {}

impl PartialOrd for ScaledDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScaledDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.unscaled.cmp(&other.unscaled);
        }
        let (lhs, rhs, _) = self.align(other);
        lhs.cmp(&rhs)
    }
}

// Hash is deliberately not implemented: equal values may carry unequal
// (unscaled, scale) pairs, and there is no canonical in-memory form to hash.

impl Neg for ScaledDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.unscaled, self.scale)
    }
}

impl Neg for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn neg(self) -> Self::Output {
        ScaledDecimal::from_parts(-&self.unscaled, self.scale)
    }
}

// ============================================================================
// Integer conversions
// ============================================================================

impl From<u64> for ScaledDecimal {
    fn from(value: u64) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

impl From<i64> for ScaledDecimal {
    fn from(value: i64) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

impl From<u128> for ScaledDecimal {
    fn from(value: u128) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

impl From<i128> for ScaledDecimal {
    fn from(value: i128) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

// Smaller unsigned types — widen to u64
impl From<u8> for ScaledDecimal {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u16> for ScaledDecimal {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for ScaledDecimal {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

// Smaller signed types — widen to i64
impl From<i8> for ScaledDecimal {
    fn from(value: i8) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i16> for ScaledDecimal {
    fn from(value: i16) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i32> for ScaledDecimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

// ============================================================================
// Float conversions
// ============================================================================

impl TryFrom<f64> for ScaledDecimal {
    type Error = DecimalError;

    /// Convert an [`f64`] through its shortest round-trip decimal string.
    ///
    /// Rust's `Display` for floats produces plain decimal notation, so the
    /// result goes through the same validation and normalization as
    /// [`FromStr`](std::str::FromStr).
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidFormat`] for NaN and the infinities,
    /// which have no decimal representation.
    fn try_from(value: f64) -> DecimalResult<Self> {
        if !value.is_finite() {
            return Err(DecimalError::InvalidFormat(format!(
                "{value} is not a finite number"
            )));
        }
        format!("{value}").parse()
    }
}

impl TryFrom<f32> for ScaledDecimal {
    type Error = DecimalError;

    fn try_from(value: f32) -> DecimalResult<Self> {
        Self::try_from(f64::from(value))
    }
}
