//! Scheduler configuration and the round safety bound.
//!
//! # Round limit
//!
//! The greedy advance rule is expected to deliver every ant in far fewer
//! rounds than `ants × rooms`, but an undiscovered cyclic-advance pattern
//! would otherwise spin forever.  [`RoundLimit`] turns that into a typed
//! failure:
//!
//!   limit = ROUND_LIMIT_FACTOR × max(ants, 1) × max(rooms, 1)
//!
//! Applications can override the derived value with
//! [`ScheduleConfig::max_rounds`].

use std::fmt;

use crate::{LemError, LemResult, Round};

/// Multiplier applied to `ants × rooms` when deriving the round limit.
pub const ROUND_LIMIT_FACTOR: u64 = 4;

// ── RoundLimit ────────────────────────────────────────────────────────────────

/// Maximum number of rounds a single scheduling run may evaluate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLimit(pub u32);

impl RoundLimit {
    /// Derive the limit from input size.  Saturates at `u32::MAX`.
    pub fn derived(ant_count: usize, room_count: usize) -> Self {
        let ants  = ant_count.max(1) as u64;
        let rooms = room_count.max(1) as u64;
        let limit = ROUND_LIMIT_FACTOR
            .saturating_mul(ants)
            .saturating_mul(rooms);
        RoundLimit(limit.min(u32::MAX as u64) as u32)
    }

    /// `true` if `round` may still be evaluated.
    #[inline]
    pub fn allows(self, round: Round) -> bool {
        round.0 <= self.0
    }
}

impl fmt::Display for RoundLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rounds", self.0)
    }
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

/// Top-level scheduler configuration.
///
/// Built by the driver (from CLI flags) and passed to the scheduler builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleConfig {
    /// Explicit round limit.  `None` derives one from input size.
    pub max_rounds: Option<u32>,

    /// Keep every room each ant visited.  When `false` only the current room
    /// is tracked and `Schedule::paths` holds just the final position.
    pub record_paths: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { max_rounds: None, record_paths: true }
    }
}

impl ScheduleConfig {
    /// Reject settings that can never produce a schedule.
    pub fn validate(&self) -> LemResult<()> {
        if self.max_rounds == Some(0) {
            return Err(LemError::Config("max_rounds must be at least 1".into()));
        }
        Ok(())
    }

    /// The effective round limit for a run over `ant_count` ants and
    /// `room_count` rooms.
    pub fn round_limit(&self, ant_count: usize, room_count: usize) -> RoundLimit {
        match self.max_rounds {
            Some(n) => RoundLimit(n),
            None    => RoundLimit::derived(ant_count, room_count),
        }
    }
}
