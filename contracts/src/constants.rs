//! Fixed per-chain deployment addresses.

use drip_types::{Account, ChainId};

use crate::error::ContractError;

/// A contract address per supported chain. An empty entry means the
/// contract is not deployed there.
#[derive(Clone, Copy, Debug)]
pub struct ConstantTable {
    pub mainnet: &'static str,
    pub ropsten: &'static str,
    pub rinkeby: &'static str,
}

impl ConstantTable {
    fn entry(&self, chain: ChainId) -> &'static str {
        match chain {
            ChainId::Mainnet => self.mainnet,
            ChainId::Ropsten => self.ropsten,
            ChainId::Rinkeby => self.rinkeby,
        }
    }
}

/// The airdrop distributor contract.
pub const AIRDROP_CONTRACT_ADDRESS: ConstantTable = ConstantTable {
    mainnet: "0x7b8c1e467e541f9d0a4d8f5c372255e15a49b8d5",
    ropsten: "0x1b3f4e0c97c4677e1a2f4d9b8e6a013d9c25fa60",
    rinkeby: "",
};

/// The ERC-20 token being dropped.
pub const TOKEN_CONTRACT_ADDRESS: ConstantTable = ConstantTable {
    mainnet: "0x69af81e73a73b40adf4f3d4223cd9b1ece623074",
    ropsten: "0x5fbdb2315678afecb367f032d93f642f64180aa3",
    rinkeby: "",
};

/// Look up a contract address for a chain.
pub fn constant(table: &ConstantTable, chain: ChainId) -> Result<Account, ContractError> {
    let raw = table.entry(chain);
    if raw.is_empty() {
        return Err(ContractError::UnknownChain(chain.to_string()));
    }
    Account::new(raw).map_err(|_| ContractError::BadConstant(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_populated_entries_are_valid_addresses() {
        for table in [&AIRDROP_CONTRACT_ADDRESS, &TOKEN_CONTRACT_ADDRESS] {
            for chain in [ChainId::Mainnet, ChainId::Ropsten] {
                let account = constant(table, chain).unwrap();
                assert!(account.is_valid());
            }
        }
    }

    #[test]
    fn missing_deployment_is_unknown_chain() {
        let err = constant(&AIRDROP_CONTRACT_ADDRESS, ChainId::Rinkeby).unwrap_err();
        assert!(matches!(err, ContractError::UnknownChain(_)));
    }
}
