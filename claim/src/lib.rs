//! State machines for the airdrop claim flow.
//!
//! Two tagged unions drive the whole card:
//! - [`CheckState`] — whether the active account holds a claimable
//!   allocation, recomputed per account.
//! - [`ClaimState`] / [`ClaimFlow`] — the claim transaction lifecycle,
//!   monotonic forward within one attempt, reset only by an explicit
//!   dialog-close action.

pub mod check;
pub mod error;
pub mod flow;

pub use check::CheckState;
pub use error::ClaimError;
pub use flow::{ClaimFlow, ClaimState};
