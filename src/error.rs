//! Error types for the analyzer's boundary.
//!
//! The core never raises: order failures become resolution records. These
//! errors cover configuration parsing and payload decoding only, and both
//! surface as exit-code-1 messages in the front end.

use thiserror::Error;

/// Invalid user-supplied configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown power '{0}'")]
    UnknownPower(String),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("empty coalition specification")]
    EmptyCoalition,

    #[error("no coalition named '{0}'")]
    UnknownCoalition(String),

    #[error("invalid priority '{0}': expected <deny|allow> <power> <region>")]
    InvalidPriority(String),
}

/// A scraped game-state payload that cannot be normalized.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to decode game payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unknown region tag '{0}'")]
    UnknownRegion(String),

    #[error("unknown power '{0}'")]
    UnknownPower(String),

    #[error("unknown unit kind '{0}'")]
    UnknownUnitKind(String),

    #[error("unknown coast '{0}'")]
    UnknownCoast(String),

    #[error("fleet in '{0}' requires a coast")]
    MissingCoast(String),

    #[error("two units share region '{0}'")]
    DuplicateUnit(String),

    #[error("invalid turn descriptor: {0}")]
    InvalidTurn(String),
}
