//! Claim-card view model for the DRIP airdrop flow.
//!
//! The card composes the eligibility check, the packet fetch, and the
//! claim transaction lifecycle into a renderable state, and talks to the
//! outside world through explicit collaborator traits:
//! - packet fetch updates arrive as [`PacketFetch`] values,
//! - the computed claimable amount flows upward through [`AmountSink`],
//! - claim transaction progress is mirrored into an external transaction
//!   dialog by [`DialogBridge`], which also resets the claim flow when
//!   that dialog is dismissed.

pub mod collaborators;
pub mod dialog;
pub mod error;
pub mod fetch;
pub mod share;
pub mod view_model;

pub use collaborators::{
    AmountSink, ClaimSubmitter, EligibilityChecker, TransactionDialog, TransactionDialogRequest,
};
pub use dialog::DialogBridge;
pub use error::CardError;
pub use fetch::PacketFetch;
pub use share::{compose_share_text, SocialNetwork};
pub use view_model::{CardState, ClaimCardViewModel, ClaimEvent};
