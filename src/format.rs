use crate::decimal::ScaledDecimal;
use std::fmt;

impl fmt::Display for ScaledDecimal {
    /// Render the canonical decimal string.
    ///
    /// Scale 0 renders the unscaled value directly. Otherwise the magnitude
    /// digit string is left-padded with zeros to at least `scale + 1`
    /// characters so an integer digit always exists, split into integer and
    /// fractional parts, and trailing fractional zeros are trimmed — dropping
    /// the decimal point entirely when the fraction empties. The minus sign
    /// is re-applied only for a non-zero magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale() == 0 {
            return write!(f, "{}", self.unscaled());
        }

        let scale = self.scale() as usize;
        let magnitude = self.unscaled().magnitude().to_string();

        let padded = if magnitude.len() < scale + 1 {
            format!("{magnitude:0>width$}", width = scale + 1)
        } else {
            magnitude
        };

        let (integer_part, fractional_part) = padded.split_at(padded.len() - scale);
        let fraction = fractional_part.trim_end_matches('0');

        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(integer_part)?;
        if !fraction.is_empty() {
            f.write_str(".")?;
            f.write_str(fraction)?;
        }
        Ok(())
    }
}

impl ScaledDecimal {
    /// Convert to a native [`f64`] by parsing the canonical string.
    ///
    /// This is lossy interop, not exact arithmetic: magnitudes or precisions
    /// beyond what an `f64` can hold round to the nearest representable
    /// value, and values past `f64::MAX` saturate to infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string()
            .parse()
            .expect("canonical decimal strings are valid f64 input")
    }
}
