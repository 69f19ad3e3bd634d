//! Error types for the `equity-charges` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, ChargesError>`.
//!
//! [`ChargesError`] covers:
//! - **Invalid arguments**: Caller preconditions (prices, quantity, margin %,
//!   holding days, tax parameters) that the calculators refuse to clamp
//! - **Unknown rate keys**: Overrides naming a constant the rate table lacks
//! - **JSON errors**: Rate table or request documents that fail to parse
//! - **I/O errors**: Rate table or request files that cannot be read

/// All possible errors produced by the charge calculators.
#[derive(Debug, thiserror::Error)]
pub enum ChargesError {
    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A rate override named a key that is not part of the rate table.
    #[error("Unknown rate key: {0}")]
    UnknownRateKey(String),

    /// Failed to (de)serialize a JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChargesError>;

/// Fail with [`ChargesError::InvalidArgument`] unless `value` is finite and
/// strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChargesError::InvalidArgument(format!(
            "{name} must be a finite value > 0, got {value}"
        )))
    }
}

/// Fail with [`ChargesError::InvalidArgument`] unless `value` is finite and
/// not negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChargesError::InvalidArgument(format!(
            "{name} must be a finite value >= 0, got {value}"
        )))
    }
}

/// Fail with [`ChargesError::InvalidArgument`] unless `value` is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChargesError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
