//! Plain data row type written by output backends.

use serde::Serialize;

/// One ant entering one room, with the room resolved to its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRow<'a> {
    pub round: u32,
    pub ant:   u32,
    pub room:  &'a str,
}
