use crate::decimal::ScaledDecimal;
use crate::error::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use std::str::FromStr;

/// Parse a canonical decimal string into `(unscaled, scale)` form.
///
/// Accepted inputs match `-?\d+(\.\d+)?` exactly: an optional leading minus,
/// one or more integer digits, and an optional fraction introduced by a
/// single `.` and carrying at least one digit. No whitespace, no `+` sign,
/// no exponent notation.
///
/// Trailing zeros of the fractional part are trimmed before the scale is
/// computed, so `"1.230"` yields unscaled 123 at scale 2 and `"-0.00"`
/// yields plain zero at scale 0 (a zero magnitude never keeps its sign).
pub(crate) fn parse_decimal(input: &str) -> DecimalResult<ScaledDecimal> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    if digits.is_empty() {
        return Err(invalid(input, "input contains no digits"));
    }

    // Split on the decimal point without allocating
    let (integer_part, fractional_part) = match digits.find('.') {
        Some(pos) => {
            let (int, rest) = digits.split_at(pos);
            let frac = &rest[1..];
            if frac.contains('.') {
                return Err(invalid(input, "multiple decimal points"));
            }
            (int, frac)
        }
        None => (digits, ""),
    };

    // The pattern requires digits on both sides of the point: "1." and ".5"
    // are malformed, as is a bare "." or "-."
    if integer_part.is_empty() {
        return Err(invalid(input, "missing integer digits"));
    }
    if digits.contains('.') && fractional_part.is_empty() {
        return Err(invalid(input, "missing fractional digits"));
    }

    for b in integer_part.bytes().chain(fractional_part.bytes()) {
        if !b.is_ascii_digit() {
            return Err(invalid(input, &format!("unexpected character {:?}", b as char)));
        }
    }

    // Normalization: trailing fractional zeros carry no information
    let fraction = fractional_part.trim_end_matches('0');

    #[allow(clippy::cast_possible_truncation)]
    let scale = fraction.len() as u32;

    // Concatenated integer and trimmed fractional digits form the unscaled
    // value; BigInt accepts leading zeros and reduces "000" to plain zero,
    // which also drops the sign of a zero magnitude
    let mut concatenated = String::with_capacity(integer_part.len() + fraction.len());
    concatenated.push_str(integer_part);
    concatenated.push_str(fraction);

    let magnitude = BigInt::from_str(&concatenated)
        .map_err(|_| invalid(input, "digits do not form an integer"))?;

    let unscaled = if negative { -magnitude } else { magnitude };
    Ok(ScaledDecimal::from_parts(unscaled, scale))
}

fn invalid(input: &str, reason: &str) -> DecimalError {
    DecimalError::InvalidFormat(format!("{input:?}: {reason}"))
}

impl FromStr for ScaledDecimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}
