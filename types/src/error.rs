//! Errors raised while validating deployment parameters.

use thiserror::Error;

/// Deployment-time configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("share {bps} bps is outside [0, 10000]")]
    ShareOutOfRange { bps: u32 },

    #[error("owner_one and owner_two must be distinct credentials")]
    SameOwner,

    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("config error: {0}")]
    Config(String),
}
