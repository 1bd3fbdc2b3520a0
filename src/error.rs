use thiserror::Error;

/// Errors produced while constructing or operating on a [`Decimal`](crate::Decimal).
///
/// Every failure is synchronous and total: the caller observes either a fully
/// constructed value or an error, never a partially initialized one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("negative scale: {0}")]
    NegativeScale(i64),

    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
