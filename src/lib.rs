//! # scaledec
//!
//! Exact fixed-point decimal arithmetic over arbitrary-precision integers.
//!
//! A [`ScaledDecimal`] stores a decimal number as an unscaled
//! arbitrary-precision signed integer plus an explicit decimal-point
//! position (the "scale"): the represented value is `unscaled / 10^scale`,
//! held exactly. Native binary floats cannot represent decimal fractions
//! like `0.1` exactly; this type can, which is what makes it suitable for
//! token amounts, prices, and anything else where `0.1 + 0.2` must equal
//! `0.3`.
//!
//! - **Exact add / sub / mul**: operands align to a common scale (addition,
//!   subtraction) or their scales add (multiplication); no digits are lost.
//! - **Scale-managed division**: truncating division at a working precision
//!   derived from the operands' digit lengths, floored at six extra
//!   significant digits.
//! - **Canonical strings**: parsing accepts `-?\d+(\.\d+)?`; rendering never
//!   emits trailing fractional zeros or a dangling decimal point.
//! - **Immutable values**: every operation returns a new instance, so values
//!   share freely across threads.
//!
//! ## Examples
//!
//! ```rust
//! use scaledec::ScaledDecimal;
//!
//! // Parse canonical decimal strings
//! let price: ScaledDecimal = "1.23".parse().unwrap();
//!
//! // Operands coerce through the same parser: strings, floats, integers
//! let total = price.add("4.56").unwrap();
//! assert_eq!(total.to_string(), "5.79");
//!
//! // Chained arithmetic stays exact until division truncates
//! let result = price
//!     .add("4.56").unwrap()
//!     .mul(7.89).unwrap()
//!     .sub(0.12).unwrap()
//!     .div(3.45).unwrap();
//! assert!((result.to_f64() - 13.2066).abs() < 0.0001);
//!
//! // Division by zero is an explicit error
//! assert!(price.div("0").is_err());
//! ```

pub(crate) mod decimal;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod ops;
pub(crate) mod parse;

// Re-export main types and traits
pub use decimal::ScaledDecimal;
pub use error::{DecimalError, DecimalResult};
pub use ops::ToDecimal;
