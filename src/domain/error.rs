//! Domain errors

use thiserror::Error;

/// Reasons a single batch entry cannot be priced.
///
/// Both variants are recovered at the dispatcher boundary and
/// downgraded to the NaN sentinel; neither reaches the API caller
/// as a failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TariffError {
    /// Listed price below the minimum (or not a number at all).
    #[error("price must be at least 1, got {price}")]
    InvalidPrice { price: f64 },

    /// Vendor key is not in the fixed registry.
    #[error("unknown pharmacy vendor: {0}")]
    UnknownVendor(String),
}

/// Result type for tariff operations
pub type TariffResult<T> = Result<T, TariffError>;
