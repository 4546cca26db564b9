//! The claim-card view model.

use drip_claim::{CheckState, ClaimFlow, ClaimState};
use drip_types::{format_fixed2, scale_to_raw, Account, Ratio, Token};
use tracing::{debug, info, warn};

use crate::collaborators::{AmountSink, ClaimSubmitter, EligibilityChecker, TransactionDialog};
use crate::dialog::DialogBridge;
use crate::error::CardError;
use crate::fetch::PacketFetch;
use crate::share::{compose_share_text, SocialNetwork};

/// What the card should render, first-match-wins over the inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardState {
    /// No token configured — render nothing at all.
    Hidden,
    /// Packet fetch in flight — skeleton.
    Loading,
    /// Packet fetch failed — message plus a retry action.
    FetchError { message: String },
    /// The claimable card itself.
    Card {
        /// Claimable amount with two decimal places ("0.00" when not eligible).
        amount: String,
        /// Decay ratio, shown only when eligible.
        ratio: Option<Ratio>,
        /// The claim button renders disabled even with a packet present;
        /// kept that way pending product clarification. The programmatic
        /// confirm path still works.
        claim_enabled: bool,
        /// Whether the claim button (and confirm dialog) exist at all.
        has_packet: bool,
    },
}

/// A claim transaction lifecycle update from the chain watcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimEvent {
    /// The transaction reached the mempool.
    Broadcast { tx_hash: String },
    /// The transaction was mined.
    Mined,
    /// Submission or execution failed.
    Failed { reason: String },
}

/// Composes the eligibility check, packet fetch, and claim flow into a
/// renderable state, and pushes the computed claimable amount upward.
///
/// Single-threaded and synchronous: every asynchronous completion is
/// delivered as a discrete method call by whoever drives the card.
pub struct ClaimCardViewModel {
    token: Option<Token>,
    network: SocialNetwork,
    post_link: String,

    account: Option<Account>,
    fetch: PacketFetch,
    check: CheckState,
    flow: ClaimFlow,
    confirm_open: bool,
    retries: u64,

    checker: Box<dyn EligibilityChecker>,
    submitter: Box<dyn ClaimSubmitter>,
    sink: Box<dyn AmountSink>,
    bridge: DialogBridge,
}

impl ClaimCardViewModel {
    pub fn new(
        token: Option<Token>,
        network: SocialNetwork,
        post_link: impl Into<String>,
        checker: Box<dyn EligibilityChecker>,
        submitter: Box<dyn ClaimSubmitter>,
        sink: Box<dyn AmountSink>,
        dialog: Box<dyn TransactionDialog>,
    ) -> Self {
        Self {
            token,
            network,
            post_link: post_link.into(),
            account: None,
            fetch: PacketFetch::Loading,
            check: CheckState::Pending,
            flow: ClaimFlow::new(),
            confirm_open: false,
            retries: 0,
            checker,
            submitter,
            sink,
            bridge: DialogBridge::new(dialog),
        }
    }

    // ── inputs ──────────────────────────────────────────────────────────

    /// The active account changed. Each change issues an independent
    /// eligibility query; the previous check result is invalidated.
    pub fn set_account(&mut self, account: Option<Account>) {
        self.account = account;
        self.check = CheckState::Pending;
        if let Some(account) = &self.account {
            debug!(%account, "eligibility check requested");
            self.checker.check(account);
        }
    }

    /// An eligibility result arrived. Results keyed to an account other
    /// than the current one are discarded.
    ///
    /// When the accepted state differs from the previous one and is Yep,
    /// the claimable amount is scaled by `10^decimals` and pushed to the
    /// parent — exactly once per distinct check state.
    pub fn check_result(&mut self, account: &Account, state: CheckState) {
        if self.account.as_ref() != Some(account) {
            debug!(%account, "discarding stale eligibility result");
            return;
        }
        if state == self.check {
            return;
        }
        self.check = state;

        let (Some(token), CheckState::Yep { claimable, .. }) = (&self.token, &self.check) else {
            return;
        };
        match scale_to_raw(claimable, token.decimals) {
            Ok(raw) => self.sink.update_amount(&raw),
            Err(err) => warn!(%err, %claimable, "claimable amount unparsable, not forwarded"),
        }
    }

    /// A packet fetch update arrived; replaces the previous state wholesale.
    pub fn packet_update(&mut self, fetch: PacketFetch) {
        self.fetch = fetch;
    }

    /// User-triggered refetch after a fetch error. The driver watches the
    /// counter and re-invokes the fetch once per increment.
    pub fn retry(&mut self) {
        self.retries += 1;
        info!(retries = self.retries, "packet refetch requested");
    }

    /// Number of refetches requested so far.
    pub fn retries(&self) -> u64 {
        self.retries
    }

    // ── claim initiation ────────────────────────────────────────────────

    /// Open the confirmation dialog. Does not submit anything; a no-op
    /// without a packet (the button does not exist then).
    pub fn click_claim(&mut self) {
        if self.fetch.packet().is_some() {
            self.confirm_open = true;
        }
    }

    /// Whether the local confirmation dialog is open.
    pub fn confirm_dialog_open(&self) -> bool {
        self.confirm_open
    }

    /// Confirm the claim: close the dialog, move the flow Unknown →
    /// Pending, and hand the packet to the submitter exactly once.
    ///
    /// The transition guard runs before the submitter, so a confirm while
    /// an attempt is already live is rejected without re-firing the
    /// on-chain submission.
    pub fn confirm_claim(&mut self) -> Result<(), CardError> {
        self.confirm_open = false;
        let packet = match self.fetch.packet() {
            Some(packet) => packet.clone(),
            None => return Err(CardError::MissingPacket),
        };
        self.flow.submit()?;
        self.submitter.submit(&packet);
        self.sync_dialog();
        Ok(())
    }

    /// Cancel the confirmation dialog; nothing else happens.
    pub fn cancel_claim(&mut self) {
        self.confirm_open = false;
    }

    // ── claim lifecycle ─────────────────────────────────────────────────

    /// Apply a chain-side lifecycle update to the claim flow and mirror
    /// the new state into the transaction dialog.
    pub fn claim_event(&mut self, event: ClaimEvent) -> Result<(), CardError> {
        match event {
            ClaimEvent::Broadcast { tx_hash } => self.flow.broadcast(tx_hash)?,
            ClaimEvent::Mined => self.flow.mine()?,
            ClaimEvent::Failed { reason } => self.flow.fail(reason)?,
        }
        self.sync_dialog();
        Ok(())
    }

    /// The external transaction dialog reported closed: the claim flow
    /// resets to Unknown, clearing the local transaction.
    pub fn transaction_dialog_closed(&mut self) {
        self.bridge.dialog_closed(&mut self.flow);
    }

    pub fn claim_state(&self) -> &ClaimState {
        self.flow.state()
    }

    pub fn check_state(&self) -> &CheckState {
        &self.check
    }

    // ── rendering ───────────────────────────────────────────────────────

    /// Select the render state. Order: no token → hidden, fetch loading →
    /// skeleton, fetch failed → error with retry, otherwise the card.
    pub fn render(&self) -> CardState {
        if self.token.is_none() {
            return CardState::Hidden;
        }
        match &self.fetch {
            PacketFetch::Loading => CardState::Loading,
            PacketFetch::Failed { message } => CardState::FetchError {
                message: message.clone(),
            },
            PacketFetch::Ready(_) => CardState::Card {
                amount: match self.check.claimable() {
                    Some(claimable) => format_fixed2(claimable),
                    None => "0.00".to_string(),
                },
                ratio: self.check.ratio(),
                claim_enabled: false,
                has_packet: true,
            },
        }
    }

    /// Forward the current claim state to the transaction dialog, when a
    /// packet and token are present.
    fn sync_dialog(&mut self) {
        let (Some(token), PacketFetch::Ready(packet)) = (&self.token, &self.fetch) else {
            return;
        };
        let share_link = compose_share_text(self.network, token, Some(packet), &self.post_link);
        self.bridge
            .on_claim_state(packet, token, share_link, self.flow.state());
    }
}
