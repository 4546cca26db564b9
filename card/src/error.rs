use drip_claim::ClaimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("no airdrop packet loaded")]
    MissingPacket,

    #[error(transparent)]
    Claim(#[from] ClaimError),
}
