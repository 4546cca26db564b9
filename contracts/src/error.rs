use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("no deployment on chain {0}")]
    UnknownChain(String),

    #[error("malformed contract address constant: {0}")]
    BadConstant(String),

    #[error("relay error: {0}")]
    Node(String),

    #[error("invalid relay response: {0}")]
    InvalidResponse(String),
}
