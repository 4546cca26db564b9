//! Airdrop packet — the relay-side record of a claimable allocation.

use serde::{Deserialize, Serialize};

use crate::error::DripError;

/// A claimable airdrop allocation for one account.
///
/// Fetched from the relay, immutable once loaded, replaced wholesale on
/// refetch. Unknown fields in the relay response are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropPacket {
    /// Allocation amount as a wei-denominated decimal string.
    pub amount: String,
}

impl AirdropPacket {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
        }
    }

    /// Parse the wei-denominated amount string into raw units.
    pub fn amount_raw(&self) -> Result<u128, DripError> {
        self.amount
            .parse::<u128>()
            .map_err(|_| DripError::InvalidAmount(self.amount.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_raw_parses_decimal_string() {
        let packet = AirdropPacket::new("5000000000000000000");
        assert_eq!(packet.amount_raw().unwrap(), 5_000_000_000_000_000_000);
    }

    #[test]
    fn amount_raw_rejects_garbage() {
        assert!(AirdropPacket::new("5.5").amount_raw().is_err());
        assert!(AirdropPacket::new("").amount_raw().is_err());
        assert!(AirdropPacket::new("-1").amount_raw().is_err());
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let packet: AirdropPacket =
            serde_json::from_str(r#"{"amount":"100","index":7,"proof":[]}"#).unwrap();
        assert_eq!(packet.amount, "100");
    }
}
