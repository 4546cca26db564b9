//! Eligibility check result.

use drip_types::Ratio;
use serde::{Deserialize, Serialize};

/// Whether an account holds a claimable airdrop allocation.
///
/// Recomputed whenever the active account changes. `PartialEq` matters:
/// downstream side effects are keyed off value identity change, so a
/// re-delivered equal state must compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckState {
    /// Query in flight (or not yet issued).
    Pending,
    /// The account is eligible.
    Yep {
        /// Claimable amount in human-readable token units.
        claimable: String,
        /// Current decay ratio.
        ratio: Ratio,
    },
    /// No allocation for this account.
    Nope,
}

impl CheckState {
    pub fn is_yep(&self) -> bool {
        matches!(self, Self::Yep { .. })
    }

    /// The claimable amount, if eligible.
    pub fn claimable(&self) -> Option<&str> {
        match self {
            Self::Yep { claimable, .. } => Some(claimable),
            _ => None,
        }
    }

    /// The decay ratio, if eligible.
    pub fn ratio(&self) -> Option<Ratio> {
        match self {
            Self::Yep { ratio, .. } => Some(*ratio),
            _ => None,
        }
    }
}
