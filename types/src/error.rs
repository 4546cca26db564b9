//! Common error type shared across crates.

use thiserror::Error;

/// Common error type for the DRIP claim flow.
#[derive(Debug, Error)]
pub enum DripError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("amount arithmetic overflowed")]
    AmountOverflow,

    #[error("amount has {digits} fraction digits but the token only has {decimals} decimals")]
    PrecisionExceeded { digits: usize, decimals: u8 },

    #[error("invalid ratio: denominator must be non-zero")]
    ZeroDenominator,

    #[error("{0}")]
    Other(String),
}
