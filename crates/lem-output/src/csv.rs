//! CSV output backend.
//!
//! Creates `moves.csv` in the configured output directory with one row per
//! move: `round,ant,room`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputResult};

/// File name created by [`CsvWriter::new`].
pub const MOVES_FILE: &str = "moves.csv";

/// Writes moves as CSV rows.
pub struct CsvWriter<W: Write = File> {
    moves:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create `moves.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Self::from_writer(File::create(dir.join(MOVES_FILE))?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write CSV to any sink.  The header is written immediately, so even a
    /// run with no moves produces a well-formed file.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut moves = WriterBuilder::new().has_headers(false).from_writer(out);
        moves.write_record(["round", "ant", "room"])?;
        Ok(Self { moves, finished: false })
    }

    /// Flush and unwrap the inner sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.moves.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> MoveWriter for CsvWriter<W> {
    fn write_round(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.moves.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
