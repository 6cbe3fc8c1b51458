use rwp_core::RwpError;
use rwp_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("initial positions length {got} does not match node count {expected}")]
    NodeCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Core(#[from] RwpError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
