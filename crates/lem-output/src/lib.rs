//! `lem-output`: move writers for scheduler output.
//!
//! | Writer        | Output                                              |
//! |---------------|-----------------------------------------------------|
//! | `TextWriter`  | one line per round, `L<ant>-<room>` tokens          |
//! | `CsvWriter`   | `moves.csv` with columns `round,ant,room`           |
//!
//! All writers implement [`MoveWriter`] and are driven by
//! [`MoveOutputObserver`], which implements `lem_sched::RoundObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_output::{MoveOutputObserver, TextWriter};
//!
//! let mut obs = MoveOutputObserver::new(TextWriter::new(std::io::stdout()));
//! scheduler.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::{CsvWriter, MOVES_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::MoveOutputObserver;
pub use row::MoveRow;
pub use text::TextWriter;
pub use writer::MoveWriter;
