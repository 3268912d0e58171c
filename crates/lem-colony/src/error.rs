//! Colony error type.

use thiserror::Error;

use lem_core::{LemError, RoomId};

/// Errors produced by `lem-colony`.
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("no path from {from} to {to}")]
    Unreachable { from: RoomId, to: RoomId },

    #[error("room {0:?} declared twice")]
    DuplicateRoom(String),

    #[error("room {0:?} is not declared")]
    UnknownRoom(String),

    #[error("rooms {a:?} and {b:?} are already linked")]
    DuplicateTunnel { a: String, b: String },

    #[error("colony has no rooms")]
    Empty,

    #[error(transparent)]
    Core(#[from] LemError),
}

pub type ColonyResult<T> = Result<T, ColonyError>;
