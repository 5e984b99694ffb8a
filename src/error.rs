use thiserror::Error;

/// Errors that can occur while constructing or combining decimal values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// The input does not match the decimal pattern `-?\d+(\.\d+)?`
    #[error("invalid decimal format: {0}")]
    InvalidFormat(String),

    /// The divisor has a zero magnitude
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
