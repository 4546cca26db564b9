//! Contract plumbing for the DRIP claim flow.
//!
//! Fixed per-chain deployment addresses, the typed token-contract handle
//! factory, and `DripClient` — the async JSON-RPC client the claim flow's
//! collaborators are implemented against.

pub mod client;
pub mod constants;
pub mod error;
pub mod token_contract;

pub use client::{CheckOutcome, DripClient, SubmitResult};
pub use constants::{constant, ConstantTable, AIRDROP_CONTRACT_ADDRESS, TOKEN_CONTRACT_ADDRESS};
pub use error::ContractError;
pub use token_contract::{token_contract, TokenContract};
