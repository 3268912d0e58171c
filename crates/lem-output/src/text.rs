//! Line-per-round text backend.
//!
//! ```text
//! L1-3 L2-2
//! L1-4 L2-5 L3-3
//! ```

use std::io::Write;

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputResult};

/// Writes each round as space-separated `L<ant>-<room>` tokens on one line.
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the inner sink (e.g. a `Vec<u8>` buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MoveWriter for TextWriter<W> {
    fn write_round(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "L{}-{}", row.ant, row.room)?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
