//! `lem-sched`: round-by-round ant movement scheduler.
//!
//! # Round procedure
//!
//! ```text
//! until every ant is at end:
//!   for each ant in EvaluationOrder (default: ascending AntId):
//!     skip if the ant is at end
//!     among tunnels at its room, in declaration order, keep neighbours
//!       that are labelled and free (empty, or the end room)
//!     move to the one with the smallest label (first wins ties),
//!       updating occupancy immediately
//!   zero moves        → ScheduleError::Stalled
//!   over RoundLimit   → ScheduleError::RoundLimitExceeded
//! ```
//!
//! Because occupancy is updated as each ant moves, an ant evaluated later in
//! the same round sees the room as taken.  Start and end are unbounded; every
//! other room holds at most one ant.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_colony::{DistanceFinder, HeapDistanceFinder};
//! use lem_core::ScheduleConfig;
//! use lem_sched::{NoopObserver, SchedulerBuilder};
//!
//! let labels = HeapDistanceFinder.distances(&colony, end, start)?;
//! let mut scheduler = SchedulerBuilder::new(ScheduleConfig::default(), &colony, &labels)
//!     .ants(10)
//!     .terminals(start, end)
//!     .build()?;
//! let schedule = scheduler.run(&mut NoopObserver)?;
//! println!("{} rounds", schedule.round_count());
//! ```

pub mod ant;
pub mod builder;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod order;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use ant::AntStore;
pub use builder::SchedulerBuilder;
pub use error::{ScheduleError, ScheduleResult};
pub use observer::{NoopObserver, RoundObserver};
pub use occupancy::Occupancy;
pub use order::{AscendingId, DescendingId, EvaluationOrder};
pub use scheduler::{Move, RoundMoves, Schedule, Scheduler};
