//! Chain identifiers for the contract constant tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The chains the airdrop contracts are deployed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    Mainnet,
    Ropsten,
    Rinkeby,
}

impl ChainId {
    /// The numeric chain id used on the wire.
    pub fn id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Rinkeby => 4,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mainnet => "mainnet",
            Self::Ropsten => "ropsten",
            Self::Rinkeby => "rinkeby",
        };
        write!(f, "{name}")
    }
}
