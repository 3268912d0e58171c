//! `lem-input`: colony description parsing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`parser`]  | `ColonyInput`, `load_colony_file`, `parse_colony_reader`, `parse_colony_str` |
//! | [`error`]   | `InputError`, `InputResult<T>`                              |
//!
//! The parser is the only place input-format faults are detected.  A
//! successful parse guarantees a start room, an end room and at least one
//! ant; whether end is reachable is left to the distance finder.

pub mod error;
pub mod parser;


pub use error::{InputError, InputResult};
pub use parser::{ColonyInput, MAX_ANTS, load_colony_file, parse_colony_reader, parse_colony_str};
