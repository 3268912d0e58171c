use lem_core::{LemError, RoomId, Round, RoundLimit};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule stalled at {round}: {remaining} ants cannot reach the end room")]
    Stalled {
        round:     Round,
        remaining: usize,
    },

    #[error("round limit of {limit} exceeded")]
    RoundLimitExceeded { limit: RoundLimit },

    #[error("{0} room is not set")]
    MissingTerminal(&'static str),

    #[error("distance labels cover {got} rooms but the colony has {expected}")]
    LabelMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("distance labels are measured from {got}, expected the end room {expected}")]
    LabelRoot {
        expected: RoomId,
        got:      RoomId,
    },

    #[error(transparent)]
    Core(#[from] LemError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
