//! Fundamental types for the DRIP airdrop claim flow.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! account addresses, tokens, airdrop packets, chain identifiers, the decay ratio,
//! and fixed-point amount math on wei-denominated decimal strings.

pub mod account;
pub mod amount;
pub mod chain;
pub mod error;
pub mod packet;
pub mod ratio;
pub mod token;

pub use account::Account;
pub use amount::{format_balance, format_fixed2, scale_to_raw};
pub use chain::ChainId;
pub use error::DripError;
pub use packet::AirdropPacket;
pub use ratio::Ratio;
pub use token::Token;
