//! ERC-20 token descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DripError;

/// The subset of an ERC-20 token's metadata the claim flow needs.
///
/// Read-only once constructed; owned by the caller and passed down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Ticker symbol, e.g. "MASK".
    pub symbol: String,
    /// Number of decimal places in the token's raw unit.
    pub decimals: u8,
}

impl Token {
    /// Create a token descriptor. The symbol must be non-empty.
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Result<Self, DripError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(DripError::Other("token symbol must not be empty".into()));
        }
        Ok(Self { symbol, decimals })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
