//! `MoveOutputObserver<W>` bridges `RoundObserver` to a `MoveWriter`.

use lem_colony::Colony;
use lem_core::Round;
use lem_sched::{RoundMoves, RoundObserver};

use crate::row::MoveRow;
use crate::writer::MoveWriter;
use crate::{OutputError, OutputResult};

/// A [`RoundObserver`] that streams every round to a [`MoveWriter`].
///
/// Errors from the writer are stored internally because `RoundObserver`
/// methods have no return value.  After `scheduler.run()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct MoveOutputObserver<W: MoveWriter> {
    writer:         W,
    rounds_written: usize,
    last_error:     Option<OutputError>,
}

impl<W: MoveWriter> MoveOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rounds_written: 0,
            last_error:     None,
        }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rounds successfully handed to the writer.
    pub fn rounds_written(&self) -> usize {
        self.rounds_written
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MoveWriter> RoundObserver for MoveOutputObserver<W> {
    fn on_round_end(&mut self, moves: &RoundMoves, colony: &Colony) {
        let rows: Vec<MoveRow<'_>> = moves
            .moves
            .iter()
            .map(|m| MoveRow {
                round: moves.round.0,
                ant:   m.ant.0,
                room:  colony.room_name(m.room),
            })
            .collect();

        let result = self.writer.write_round(&rows);
        if result.is_ok() {
            self.rounds_written += 1;
        }
        self.store_err(result);
    }

    fn on_schedule_end(&mut self, last_round: Round) {
        tracing::debug!(last = last_round.0, rounds = self.rounds_written, "flushing move output");
        let result = self.writer.finish();
        self.store_err(result);
    }
}
