//! Collaborator seams the card talks through.
//!
//! The surrounding application owns the network, the wallet, and the
//! dialog surfaces; the card only holds trait objects. Ambient lookups in
//! the original flow (current account, current social network) are
//! explicit parameters here, and reactive effects are explicit calls.

use drip_claim::ClaimState;
use drip_types::{Account, AirdropPacket};

/// Issues eligibility queries.
///
/// `check` is fire-and-forget: the result arrives later as a discrete
/// [`check_result`](crate::ClaimCardViewModel::check_result) call.
/// Coalescing or cancelling in-flight queries for stale accounts is the
/// implementer's concern.
pub trait EligibilityChecker {
    fn check(&mut self, account: &Account);
}

/// Kicks off the on-chain claim for a fetched packet.
///
/// Lifecycle updates come back as [`ClaimEvent`](crate::ClaimEvent)s.
pub trait ClaimSubmitter {
    fn submit(&mut self, packet: &AirdropPacket);
}

/// What the external transaction dialog is asked to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDialogRequest {
    /// Pre-composed social share message.
    pub share_link: String,
    /// Current claim transaction state, passed through opaquely.
    pub state: ClaimState,
    /// Human-readable summary, e.g. `"Claiming 5 MASK."`.
    pub summary: String,
}

/// External transaction dialog surface.
///
/// Dismissal is reported back through
/// [`transaction_dialog_closed`](crate::ClaimCardViewModel::transaction_dialog_closed).
pub trait TransactionDialog {
    fn open(&mut self, request: TransactionDialogRequest);
}

/// Upward notification of the claimable amount, wei-denominated.
pub trait AmountSink {
    fn update_amount(&mut self, raw_amount: &str);
}
