//! `lem-core`: foundational types for the `lem-in` colony scheduler.
//!
//! This crate is a dependency of every other `lem-*` crate.  It has no
//! `lem-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `RoomId`, `TunnelId`, `AntId`                         |
//! | [`round`]   | `Round` counter                                       |
//! | [`config`]  | `ScheduleConfig`, `RoundLimit`                        |
//! | [`error`]   | `LemError`, `LemResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ROUND_LIMIT_FACTOR, RoundLimit, ScheduleConfig};
pub use error::{LemError, LemResult};
pub use ids::{AntId, RoomId, TunnelId};
pub use round::Round;
