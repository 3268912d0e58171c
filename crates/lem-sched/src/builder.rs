//! Fluent builder for constructing a [`Scheduler`].

use lem_colony::{Colony, DistanceMap};
use lem_core::{AntId, RoomId, Round, ScheduleConfig};

use crate::{AntStore, AscendingId, EvaluationOrder, Occupancy, ScheduleError, ScheduleResult, Scheduler};

/// Fluent builder for [`Scheduler<'a, O>`].
///
/// # Required inputs
///
/// - [`ScheduleConfig`]: round limit override, path recording
/// - `&Colony`: the room graph
/// - `&DistanceMap`: hop counts to the end room (rooted at end), one slot per colony room
/// - `.terminals(start, end)` (or `.start()` / `.end()`)
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default          |
/// |---------------|------------------|
/// | `.ants(n)`    | 0                |
/// | `.order(p)`   | [`AscendingId`]  |
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = SchedulerBuilder::new(config, &colony, &labels)
///     .ants(3)
///     .terminals(start, end)
///     .order(DescendingId)
///     .build()?;
/// let schedule = scheduler.run(&mut NoopObserver)?;
/// ```
pub struct SchedulerBuilder<'a, O: EvaluationOrder = AscendingId> {
    config: ScheduleConfig,
    colony: &'a Colony,
    labels: &'a DistanceMap,
    ants:   usize,
    start:  RoomId,
    end:    RoomId,
    order:  O,
}

impl<'a> SchedulerBuilder<'a, AscendingId> {
    /// Create a builder with the required borrowed inputs.
    pub fn new(config: ScheduleConfig, colony: &'a Colony, labels: &'a DistanceMap) -> Self {
        Self {
            config,
            colony,
            labels,
            ants:  0,
            start: RoomId::INVALID,
            end:   RoomId::INVALID,
            order: AscendingId,
        }
    }
}

impl<'a, O: EvaluationOrder> SchedulerBuilder<'a, O> {
    /// Number of ants placed at start.
    pub fn ants(mut self, count: usize) -> Self {
        self.ants = count;
        self
    }

    pub fn start(mut self, room: RoomId) -> Self {
        self.start = room;
        self
    }

    pub fn end(mut self, room: RoomId) -> Self {
        self.end = room;
        self
    }

    pub fn terminals(self, start: RoomId, end: RoomId) -> Self {
        self.start(start).end(end)
    }

    /// Replace the per-round evaluation order.
    pub fn order<P: EvaluationOrder>(self, order: P) -> SchedulerBuilder<'a, P> {
        SchedulerBuilder {
            config: self.config,
            colony: self.colony,
            labels: self.labels,
            ants:   self.ants,
            start:  self.start,
            end:    self.end,
            order,
        }
    }

    /// Validate inputs, place every ant at start, and return a ready-to-run
    /// [`Scheduler`].
    pub fn build(self) -> ScheduleResult<Scheduler<'a, O>> {
        self.config.validate()?;

        // ── Validate terminals and labels ─────────────────────────────────
        if !self.start.is_valid() {
            return Err(ScheduleError::MissingTerminal("start"));
        }
        if !self.end.is_valid() {
            return Err(ScheduleError::MissingTerminal("end"));
        }
        self.colony.check_room(self.start)?;
        self.colony.check_room(self.end)?;

        let room_count = self.colony.room_count();
        if self.labels.room_count() != room_count {
            return Err(ScheduleError::LabelMismatch {
                expected: room_count,
                got:      self.labels.room_count(),
            });
        }
        // Ants descend toward end, so the labels must count hops to it.
        if self.labels.root() != self.end {
            return Err(ScheduleError::LabelRoot {
                expected: self.end,
                got:      self.labels.root(),
            });
        }

        // ── Ant state and evaluation order ────────────────────────────────
        let ants      = AntStore::new(self.ants, self.start, self.config.record_paths);
        let occupancy = Occupancy::new(room_count, self.start, self.end, self.ants);

        let mut evaluation: Vec<AntId> = ants.ids().collect();
        evaluation.sort_by(|&a, &b| self.order.compare(a, b));

        let arrived = if self.start == self.end { self.ants } else { 0 };
        let limit   = self.config.round_limit(self.ants, room_count);

        tracing::debug!(
            ants  = self.ants,
            rooms = room_count,
            limit = limit.0,
            "scheduler ready",
        );

        Ok(Scheduler {
            config:     self.config,
            ants,
            occupancy,
            colony:     self.colony,
            labels:     self.labels,
            start:      self.start,
            end:        self.end,
            limit,
            order:      self.order,
            evaluation,
            round:      Round::ZERO,
            arrived,
            rounds:     Vec::new(),
        })
    }
}
