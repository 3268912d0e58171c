//! The `Scheduler` struct and its round loop.

use lem_colony::{Colony, DistanceMap};
use lem_core::{AntId, RoomId, Round, RoundLimit, ScheduleConfig};

use crate::{AntStore, AscendingId, EvaluationOrder, Occupancy, RoundObserver, ScheduleError, ScheduleResult};

// ── Round records ─────────────────────────────────────────────────────────────

/// One ant stepping into `room`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub ant:  AntId,
    pub room: RoomId,
}

/// Every move made during one round, in ascending `AntId` order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundMoves {
    pub round: Round,
    pub moves: Vec<Move>,
}

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Emitted rounds in chronological order.
    pub rounds: Vec<RoundMoves>,

    /// Rooms visited by each ant, indexed by `AntId::slot()`.
    pub paths: Vec<Vec<RoomId>>,
}

impl Schedule {
    /// Total number of rounds needed to deliver every ant.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total number of single-tunnel moves across all rounds.
    pub fn move_count(&self) -> usize {
        self.rounds.iter().map(|r| r.moves.len()).sum()
    }

    pub fn path(&self, ant: AntId) -> &[RoomId] {
        &self.paths[ant.slot()]
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// The round-by-round movement scheduler.
///
/// `Scheduler<'a, O>` borrows the colony and distance labels for the length
/// of one run and owns all mutable state (ant positions, occupancy).  The
/// labels are hop counts *to* the end room; ants always head for the free
/// labelled neighbour with the smallest label.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler<'a, O: EvaluationOrder = AscendingId> {
    pub config: ScheduleConfig,

    /// Ant positions and path history.
    pub ants: AntStore,

    /// Ants per room.
    pub occupancy: Occupancy,

    pub(crate) colony:     &'a Colony,
    pub(crate) labels:     &'a DistanceMap,
    pub(crate) start:      RoomId,
    pub(crate) end:        RoomId,
    pub(crate) limit:      RoundLimit,
    pub(crate) order:      O,
    /// Ants sorted once by `order`.
    pub(crate) evaluation: Vec<AntId>,
    pub(crate) round:      Round,
    pub(crate) arrived:    usize,
    pub(crate) rounds:     Vec<RoundMoves>,
}

impl<'a, O: EvaluationOrder> Scheduler<'a, O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run rounds until every ant is at end.
    ///
    /// Calls observer hooks at every round boundary; `on_schedule_end` fires
    /// on failure too so writers can flush what was emitted.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// On success the rounds and paths are moved into the returned
    /// [`Schedule`]; [`schedule`][Self::schedule] is empty afterwards.  On
    /// failure they stay in place for inspection.
    pub fn run<Obs: RoundObserver>(&mut self, observer: &mut Obs) -> ScheduleResult<Schedule> {
        let result = self.drive(observer);
        observer.on_schedule_end(self.round);
        result?;

        tracing::info!(
            ants   = self.ants.count(),
            rounds = self.round.0,
            "all ants delivered",
        );
        Ok(Schedule {
            rounds: std::mem::take(&mut self.rounds),
            paths:  std::mem::take(&mut self.ants.paths),
        })
    }

    /// Evaluate exactly one round.
    ///
    /// Returns `Ok(None)` once every ant is at end.
    pub fn step(&mut self) -> ScheduleResult<Option<&RoundMoves>> {
        if self.is_complete() {
            return Ok(None);
        }

        let next = self.round.next();
        self.check_limit(next)?;

        let moves = self.advance_round();
        if moves.is_empty() {
            let remaining = self.remaining();
            tracing::warn!(round = next.0, remaining, "no ant could move");
            return Err(ScheduleError::Stalled { round: next, remaining });
        }

        debug_assert!(
            self.occupancy.overfull_rooms().next().is_none(),
            "room capacity exceeded in {next}",
        );
        tracing::debug!(round = next.0, moves = moves.len(), arrived = self.arrived, "round done");

        self.round = next;
        self.rounds.push(RoundMoves { round: next, moves });
        Ok(self.rounds.last())
    }

    /// `true` once every ant occupies the end room.
    pub fn is_complete(&self) -> bool {
        self.arrived == self.ants.count()
    }

    /// Ants not yet at end.
    pub fn remaining(&self) -> usize {
        self.ants.count() - self.arrived
    }

    /// The last round emitted so far.
    pub fn current_round(&self) -> Round {
        self.round
    }

    /// `(start, end)` rooms.
    pub fn terminals(&self) -> (RoomId, RoomId) {
        (self.start, self.end)
    }

    pub fn round_limit(&self) -> RoundLimit {
        self.limit
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Snapshot of the rounds emitted so far and every ant's path.
    pub fn schedule(&self) -> Schedule {
        Schedule {
            rounds: self.rounds.clone(),
            paths:  self.ants.paths.clone(),
        }
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn drive<Obs: RoundObserver>(&mut self, observer: &mut Obs) -> ScheduleResult<()> {
        let colony = self.colony;
        while !self.is_complete() {
            let next = self.round.next();
            self.check_limit(next)?;
            observer.on_round_start(next);
            if let Some(moves) = self.step()? {
                observer.on_round_end(moves, colony);
            }
        }
        Ok(())
    }

    fn check_limit(&self, next: Round) -> ScheduleResult<()> {
        if self.limit.allows(next) {
            return Ok(());
        }
        tracing::error!(limit = self.limit.0, "round limit exceeded");
        Err(ScheduleError::RoundLimitExceeded { limit: self.limit })
    }

    /// One pass over every ant in evaluation order.
    ///
    /// Occupancy changes as soon as an ant moves, so a room vacated earlier
    /// in the pass can be refilled later in the same pass, but never twice.
    fn advance_round(&mut self) -> Vec<Move> {
        let mut moves = Vec::new();

        for i in 0..self.evaluation.len() {
            let ant  = self.evaluation[i];
            let here = self.ants.room(ant);
            if here == self.end {
                continue;
            }

            let Some(dest) = self.pick_destination(here) else {
                continue;
            };

            self.occupancy.transfer(here, dest);
            self.ants.move_to(ant, dest);
            if dest == self.end {
                self.arrived += 1;
            }
            tracing::trace!(ant = ant.0, to = self.colony.room_name(dest), "move");
            moves.push(Move { ant, room: dest });
        }

        moves.sort_unstable_by_key(|m| m.ant);
        moves
    }

    /// The free, labelled neighbour of `here` with the smallest label.
    ///
    /// Ties go to the tunnel declared first.  A self-loop never qualifies:
    /// the evaluating ant itself occupies the room.
    fn pick_destination(&self, here: RoomId) -> Option<RoomId> {
        let mut best: Option<(u32, RoomId)> = None;
        for (_, neighbor) in self.colony.neighbors(here) {
            if !self.occupancy.is_free(neighbor) {
                continue;
            }
            let Some(label) = self.labels.get(neighbor) else {
                continue;
            };
            if best.is_none_or(|(b, _)| label < b) {
                best = Some((label, neighbor));
            }
        }
        best.map(|(_, room)| room)
    }
}
