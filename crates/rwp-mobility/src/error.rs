use rwp_core::RwpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("invalid waypoint configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] RwpError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
