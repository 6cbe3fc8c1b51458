//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RwpError` as one
//! variant via `From`.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `rwp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RwpError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rwp-*` crates.
pub type RwpResult<T> = Result<T, RwpError>;
