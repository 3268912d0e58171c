//! Round observer trait for rendering and data collection.

use lem_colony::Colony;
use lem_core::Round;

use crate::RoundMoves;

/// Callbacks invoked by [`Scheduler::run`][crate::Scheduler::run] at round
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: move printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl RoundObserver for Printer {
///     fn on_round_end(&mut self, moves: &RoundMoves, colony: &Colony) {
///         println!("{}: {} ants moved", moves.round, moves.moves.len());
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called before a round is evaluated.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after a round in which at least one ant moved.
    ///
    /// `colony` resolves destination `RoomId`s to names.
    fn on_round_end(&mut self, _moves: &RoundMoves, _colony: &Colony) {}

    /// Called once when the run stops, successfully or not.
    ///
    /// `last_round` is the last round emitted (`Round::ZERO` if none).
    fn on_schedule_end(&mut self, _last_round: Round) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
