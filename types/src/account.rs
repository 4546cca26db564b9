//! Account address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DripError;

/// An externally-owned account address, always prefixed with `0x`.
///
/// Stored as the raw hex string; no checksum normalization is applied,
/// comparisons are byte-for-byte on the stored form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account(String);

impl Account {
    /// The standard prefix for all account addresses.
    pub const PREFIX: &'static str = "0x";

    /// Number of hex characters after the prefix.
    pub const HEX_LEN: usize = 40;

    /// Create an account address, validating its shape.
    pub fn new(raw: impl Into<String>) -> Result<Self, DripError> {
        let s = raw.into();
        let account = Self(s);
        if !account.is_valid() {
            return Err(DripError::InvalidAddress(account.0));
        }
        Ok(account)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed: `0x` + 40 hex chars.
    pub fn is_valid(&self) -> bool {
        let Some(hex) = self.0.strip_prefix(Self::PREFIX) else {
            return false;
        };
        hex.len() == Self::HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[test]
    fn accepts_well_formed_address() {
        let account = Account::new(ADDR).unwrap();
        assert_eq!(account.as_str(), ADDR);
        assert!(account.is_valid());
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(Account::new("1234567890abcdef1234567890abcdef12345678").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Account::new("0x1234").is_err());
        assert!(Account::new(format!("{ADDR}ff")).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(Account::new("0xzz34567890abcdef1234567890abcdef12345678").is_err());
    }

    #[test]
    fn display_matches_raw() {
        let account = Account::new(ADDR).unwrap();
        assert_eq!(account.to_string(), ADDR);
    }
}
