//! Typed handle to the airdropped token's contract.

use drip_types::{Account, ChainId};

use crate::client::DripClient;
use crate::constants::{constant, TOKEN_CONTRACT_ADDRESS};
use crate::error::ContractError;

/// A typed handle bound to the token contract on one chain.
pub struct TokenContract {
    address: Account,
    client: DripClient,
}

/// Bind a [`TokenContract`] to the fixed deployment address for `chain`.
///
/// Constant lookup composed with handle instantiation; fails only when
/// the token has no deployment on the chain.
pub fn token_contract(chain: ChainId, client: DripClient) -> Result<TokenContract, ContractError> {
    let address = constant(&TOKEN_CONTRACT_ADDRESS, chain)?;
    Ok(TokenContract { address, client })
}

impl TokenContract {
    /// The bound deployment address.
    pub fn address(&self) -> &Account {
        &self.address
    }

    /// ERC-20 `balanceOf` for `account`.
    pub async fn balance_of(&self, account: &Account) -> Result<u128, ContractError> {
        self.client.balance_of(&self.address, account).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_to_the_mainnet_constant() {
        let client = DripClient::new("https://relay.drip.fi").unwrap();
        let contract = token_contract(ChainId::Mainnet, client).unwrap();
        assert_eq!(
            contract.address().as_str(),
            "0x69af81e73a73b40adf4f3d4223cd9b1ece623074"
        );
    }

    #[test]
    fn unknown_chain_fails_to_bind() {
        let client = DripClient::new("https://relay.drip.fi").unwrap();
        assert!(matches!(
            token_contract(ChainId::Rinkeby, client),
            Err(ContractError::UnknownChain(_))
        ));
    }
}
