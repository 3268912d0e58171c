//! `lem-colony`: colony graph and shortest-distance search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`colony`]   | `Colony` (CSR undirected adjacency), `ColonyBuilder`      |
//! | [`distance`] | `DistanceFinder` trait, `HeapDistanceFinder`, `DistanceMap` |
//! | [`error`]    | `ColonyError`, `ColonyResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` for the room-name index.                 |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public value types.   |

pub mod colony;
pub mod distance;
pub mod error;


pub use colony::{Colony, ColonyBuilder, Room};
pub use distance::{DistanceFinder, DistanceMap, HeapDistanceFinder, shortest_distances};
pub use error::{ColonyError, ColonyResult};
