//! Bridge between the claim flow and the external transaction dialog.

use drip_claim::{ClaimFlow, ClaimState};
use drip_types::{format_balance, AirdropPacket, Token};
use tracing::{debug, warn};

use crate::collaborators::{TransactionDialog, TransactionDialogRequest};

/// One-directional notification channel to the transaction dialog.
///
/// Forwards every distinct non-Unknown [`ClaimState`] exactly once, and
/// resets the claim flow when the dialog reports closed. The dialog
/// itself (rendering, dismissal UI) lives outside this crate.
pub struct DialogBridge {
    dialog: Box<dyn TransactionDialog>,
    last_forwarded: Option<ClaimState>,
}

impl DialogBridge {
    pub fn new(dialog: Box<dyn TransactionDialog>) -> Self {
        Self {
            dialog,
            last_forwarded: None,
        }
    }

    /// React to a claim-state change while a packet is present.
    ///
    /// Unknown states and states equal to the last forwarded one are
    /// ignored, so each transition produces exactly one open request.
    pub fn on_claim_state(
        &mut self,
        packet: &AirdropPacket,
        token: &Token,
        share_link: String,
        state: &ClaimState,
    ) {
        if state.is_unknown() {
            return;
        }
        if self.last_forwarded.as_ref() == Some(state) {
            return;
        }

        let raw = match packet.amount_raw() {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "packet amount unparsable, summarizing as zero");
                0
            }
        };
        let summary = format!(
            "Claiming {} {}.",
            format_balance(raw, token.decimals, 6),
            token.symbol
        );

        debug!(state = state.label(), "opening transaction dialog");
        self.last_forwarded = Some(state.clone());
        self.dialog.open(TransactionDialogRequest {
            share_link,
            state: state.clone(),
            summary,
        });
    }

    /// The external dialog reported closed: reset the claim flow back to
    /// Unknown (legal from any state, including terminals).
    pub fn dialog_closed(&mut self, flow: &mut ClaimFlow) {
        flow.reset();
        self.last_forwarded = None;
    }
}
