use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumericError {
    #[error("Numeric error: Value is missing")]
    Missing,
    #[error("Numeric error: {0}")]
    InvalidFormat(String),
    #[error("Numeric error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}
