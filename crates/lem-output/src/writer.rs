//! The `MoveWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Errors are reported per call; [`MoveOutputObserver`][crate::MoveOutputObserver]
/// stores the first one for retrieval after the run.
pub trait MoveWriter {
    /// Write every move of one round.  `rows` is never empty and is sorted
    /// by ascending ant.
    fn write_round(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: MoveWriter + ?Sized> MoveWriter for Box<W> {
    fn write_round(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        (**self).write_round(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Fan out to several writers.  Every writer sees every call; the first
/// error is returned.
impl<W: MoveWriter> MoveWriter for Vec<W> {
    fn write_round(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        let mut first = Ok(());
        for w in self.iter_mut() {
            let result = w.write_round(rows);
            if first.is_ok() {
                first = result;
            }
        }
        first
    }

    fn finish(&mut self) -> OutputResult<()> {
        let mut first = Ok(());
        for w in self.iter_mut() {
            let result = w.finish();
            if first.is_ok() {
                first = result;
            }
        }
        first
    }
}
