use lem_colony::ColonyError;
use thiserror::Error;

/// Everything that can be wrong with a colony description.
///
/// `line` fields are 1-based.  Every variant except `Io` renders as the
/// detail of an "invalid data format" report.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number of ants, {0}")]
    InvalidAntCount(String),

    #[error("line {line}: duplicate {command} command")]
    DuplicateCommand {
        line:    usize,
        command: &'static str,
    },

    #[error("no start room found")]
    MissingStart,

    #[error("no end room found")]
    MissingEnd,

    #[error("line {line}: duplicate room {name:?}")]
    DuplicateRoom { line: usize, name: String },

    #[error("line {line}: invalid room name {name:?}")]
    InvalidRoomName { line: usize, name: String },

    #[error("line {line}: invalid coordinates for room {name:?}")]
    InvalidCoordinates { line: usize, name: String },

    #[error("line {line}: link to unknown room {name:?}")]
    UnknownRoom { line: usize, name: String },

    #[error("line {line}: duplicate tunnel {a}-{b}")]
    DuplicateTunnel { line: usize, a: String, b: String },

    #[error("line {line}: unrecognised line {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error(transparent)]
    Colony(#[from] ColonyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// `true` for faults in the description itself, as opposed to failing
    /// to read it.
    pub fn is_format(&self) -> bool {
        !matches!(self, InputError::Io(_))
    }
}

pub type InputResult<T> = Result<T, InputError>;
