//! Error types for decoding encoded dates.

/// Why an encoded date could not be turned into a valid instant.
///
/// Conversion never surfaces these; they are only returned by the strict
/// decoding entry points ([`crate::encoded::decode`] and serde support).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("No epoch milliseconds found in encoded date: {0:?}")]
    NotANumber(String),

    #[error("Epoch milliseconds out of range: {0}")]
    OutOfRange(i64),
}
