//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `LemError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::RoomId;

/// The base error type for `lem-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum LemError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lem-*` crates.
pub type LemResult<T> = Result<T, LemError>;
