//! Claim transaction lifecycle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClaimError;

/// The lifecycle of one claim transaction.
///
/// ```text
/// Unknown --submit--> Pending --broadcast--> Submitted --mine--> Confirmed (terminal)
///                                                      \--fail--> Failed   (terminal)
/// any non-Unknown --reset--> Unknown
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    /// No claim attempt in progress.
    #[default]
    Unknown,
    /// Submission requested, not yet broadcast.
    Pending,
    /// Broadcast to the chain, awaiting confirmation.
    Submitted { tx_hash: String },
    /// Mined and confirmed.
    Confirmed { tx_hash: String },
    /// Submission or execution failed.
    Failed { reason: String },
}

impl ClaimState {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Whether this state can only be exited by an explicit reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed { .. } | Self::Failed { .. })
    }

    /// Short tag name, for logs and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Pending => "pending",
            Self::Submitted { .. } => "submitted",
            Self::Confirmed { .. } => "confirmed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Owns the current [`ClaimState`] and enforces the transition graph.
///
/// Transitions are monotonic forward within a single attempt; terminal
/// states are only exited via [`ClaimFlow::reset`], never silently.
#[derive(Clone, Debug, Default)]
pub struct ClaimFlow {
    state: ClaimState,
}

impl ClaimFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ClaimState {
        &self.state
    }

    /// Start a claim attempt: Unknown → Pending.
    pub fn submit(&mut self) -> Result<(), ClaimError> {
        match self.state {
            ClaimState::Unknown => self.transition(ClaimState::Pending),
            _ => Err(self.illegal("submit")),
        }
    }

    /// The transaction hit the mempool: Pending → Submitted.
    pub fn broadcast(&mut self, tx_hash: impl Into<String>) -> Result<(), ClaimError> {
        match self.state {
            ClaimState::Pending => self.transition(ClaimState::Submitted {
                tx_hash: tx_hash.into(),
            }),
            _ => Err(self.illegal("broadcast")),
        }
    }

    /// The transaction was mined: Submitted → Confirmed.
    pub fn mine(&mut self) -> Result<(), ClaimError> {
        match &self.state {
            ClaimState::Submitted { tx_hash } => {
                let tx_hash = tx_hash.clone();
                self.transition(ClaimState::Confirmed { tx_hash })
            }
            _ => Err(self.illegal("mine")),
        }
    }

    /// The attempt failed. Legal from Pending (submission failure, no hash
    /// yet) and from Submitted (execution failure).
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), ClaimError> {
        match self.state {
            ClaimState::Pending | ClaimState::Submitted { .. } => {
                self.transition(ClaimState::Failed {
                    reason: reason.into(),
                })
            }
            _ => Err(self.illegal("fail")),
        }
    }

    /// Explicit reset back to Unknown, legal from any state. This is the
    /// only way out of a terminal state. A no-op when already Unknown.
    pub fn reset(&mut self) {
        if !self.state.is_unknown() {
            debug!(from = self.state.label(), "claim flow reset");
            self.state = ClaimState::Unknown;
        }
    }

    fn transition(&mut self, next: ClaimState) -> Result<(), ClaimError> {
        debug!(from = self.state.label(), to = next.label(), "claim transition");
        self.state = next;
        Ok(())
    }

    fn illegal(&self, op: &'static str) -> ClaimError {
        ClaimError::InvalidTransition {
            from: self.state.label(),
            op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_to_confirmed() {
        let mut flow = ClaimFlow::new();
        assert!(flow.state().is_unknown());

        flow.submit().unwrap();
        assert_eq!(flow.state(), &ClaimState::Pending);

        flow.broadcast("0xabc").unwrap();
        assert_eq!(
            flow.state(),
            &ClaimState::Submitted { tx_hash: "0xabc".into() }
        );

        flow.mine().unwrap();
        assert_eq!(
            flow.state(),
            &ClaimState::Confirmed { tx_hash: "0xabc".into() }
        );
        assert!(flow.state().is_terminal());
    }

    #[test]
    fn failure_from_submitted() {
        let mut flow = ClaimFlow::new();
        flow.submit().unwrap();
        flow.broadcast("0xabc").unwrap();
        flow.fail("reverted").unwrap();
        assert_eq!(flow.state(), &ClaimState::Failed { reason: "reverted".into() });
        assert!(flow.state().is_terminal());
    }

    #[test]
    fn failure_before_broadcast() {
        let mut flow = ClaimFlow::new();
        flow.submit().unwrap();
        flow.fail("rejected by relay").unwrap();
        assert!(flow.state().is_terminal());
    }

    #[test]
    fn illegal_edges_are_rejected() {
        let mut flow = ClaimFlow::new();
        assert_eq!(
            flow.mine().unwrap_err(),
            ClaimError::InvalidTransition { from: "unknown", op: "mine" }
        );
        assert!(flow.broadcast("0x1").is_err());
        assert!(flow.fail("nope").is_err());

        flow.submit().unwrap();
        // double submit within one attempt
        assert!(flow.submit().is_err());
        // cannot mine before broadcast
        assert!(flow.mine().is_err());
    }

    #[test]
    fn terminal_states_only_exit_via_reset() {
        let mut flow = ClaimFlow::new();
        flow.submit().unwrap();
        flow.broadcast("0x1").unwrap();
        flow.mine().unwrap();

        assert!(flow.submit().is_err());
        assert!(flow.fail("late").is_err());

        flow.reset();
        assert!(flow.state().is_unknown());
        // a fresh attempt is legal after reset
        flow.submit().unwrap();
    }

    #[test]
    fn reset_from_every_state() {
        let builders: [fn(&mut ClaimFlow); 5] = [
            |_| {},
            |f| f.submit().unwrap(),
            |f| {
                f.submit().unwrap();
                f.broadcast("0x1").unwrap();
            },
            |f| {
                f.submit().unwrap();
                f.broadcast("0x1").unwrap();
                f.mine().unwrap();
            },
            |f| {
                f.submit().unwrap();
                f.fail("boom").unwrap();
            },
        ];
        for build in builders {
            let mut flow = ClaimFlow::new();
            build(&mut flow);
            flow.reset();
            assert!(flow.state().is_unknown());
        }
    }
}
