use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("illegal claim transition: {op} from {from}")]
    InvalidTransition {
        from: &'static str,
        op: &'static str,
    },
}
