//! Line-oriented colony description parser.
//!
//! # Format
//!
//! ```text
//! 3              ← ant count, first non-comment line
//! ##start        ← next room line is the start room
//! 1 23 3         ← room: name x y
//! ##end
//! 0 9 5
//! 2 16 7
//! # comment      ← ignored, as are unknown ##commands and blank lines
//! 0-2            ← tunnel: a-b
//! 1-2
//! ```
//!
//! Room and tunnel lines may interleave, but a tunnel may only name rooms
//! declared above it.  Room names never start with `L` or `#` and never
//! contain `-`.

use std::io::BufRead;
use std::path::Path;

use lem_colony::{Colony, ColonyBuilder, ColonyError};
use lem_core::RoomId;

use crate::{InputError, InputResult};

/// Upper bound on the ant count.
pub const MAX_ANTS: usize = 10_000_000;

/// A parsed colony description.
pub struct ColonyInput {
    pub ant_count: usize,
    pub colony:    Colony,
    pub start:     RoomId,
    pub end:       RoomId,

    /// The description as read, one entry per line, for echoing.
    pub lines: Vec<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a colony description file.
pub fn load_colony_file(path: &Path) -> InputResult<ColonyInput> {
    let file = std::fs::File::open(path)?;
    parse_colony_reader(std::io::BufReader::new(file))
}

/// Like [`load_colony_file`] but accepts any buffered reader.
pub fn parse_colony_reader<R: BufRead>(reader: R) -> InputResult<ColonyInput> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    parse_lines(lines)
}

/// Parse a description held in memory.
pub fn parse_colony_str(text: &str) -> InputResult<ColonyInput> {
    parse_lines(text.lines().map(str::to_owned).collect())
}

fn parse_lines(lines: Vec<String>) -> InputResult<ColonyInput> {
    let mut parser = Parser::default();
    for (i, text) in lines.iter().enumerate() {
        parser.line(i + 1, text)?;
    }
    let (ant_count, colony, start, end) = parser.finish()?;

    tracing::debug!(
        ants    = ant_count,
        rooms   = colony.room_count(),
        tunnels = colony.tunnel_count(),
        "colony parsed",
    );

    Ok(ColonyInput { ant_count, colony, start, end, lines })
}

// ── Parser state ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum Terminal {
    Start,
    End,
}

impl Terminal {
    fn command(self) -> &'static str {
        match self {
            Terminal::Start => "##start",
            Terminal::End => "##end",
        }
    }

    fn missing(self) -> InputError {
        match self {
            Terminal::Start => InputError::MissingStart,
            Terminal::End => InputError::MissingEnd,
        }
    }
}

#[derive(Default)]
struct Parser {
    ant_count:  Option<usize>,
    builder:    ColonyBuilder,
    start:      Option<RoomId>,
    end:        Option<RoomId>,
    seen_start: bool,
    seen_end:   bool,
    /// A terminal command still waiting for its room line.
    pending:    Option<Terminal>,
}

impl Parser {
    fn line(&mut self, line: usize, raw: &str) -> InputResult<()> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }

        if let Some(rest) = text.strip_prefix('#') {
            return match rest {
                "#start" => self.command(line, Terminal::Start),
                "#end" => self.command(line, Terminal::End),
                _ => Ok(()),
            };
        }

        if self.ant_count.is_none() {
            self.ant_count = Some(parse_ant_count(line, text)?);
            return Ok(());
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        match fields.as_slice() {
            [name, x, y] => self.room(line, name, x, y),
            [link] if link.contains('-') => self.tunnel(line, link),
            _ => Err(InputError::MalformedLine { line, text: text.to_owned() }),
        }
    }

    fn command(&mut self, line: usize, which: Terminal) -> InputResult<()> {
        let seen = match which {
            Terminal::Start => &mut self.seen_start,
            Terminal::End => &mut self.seen_end,
        };
        if *seen {
            return Err(InputError::DuplicateCommand { line, command: which.command() });
        }
        *seen = true;
        if let Some(pending) = self.pending {
            return Err(pending.missing());
        }
        self.pending = Some(which);
        Ok(())
    }

    fn room(&mut self, line: usize, name: &str, x: &str, y: &str) -> InputResult<()> {
        if name.starts_with('L') || name.contains('-') {
            return Err(InputError::InvalidRoomName { line, name: name.to_owned() });
        }
        let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
            return Err(InputError::InvalidCoordinates { line, name: name.to_owned() });
        };

        let id = self.builder.add_room(name, x, y).map_err(|e| match e {
            ColonyError::DuplicateRoom(name) => InputError::DuplicateRoom { line, name },
            other => other.into(),
        })?;

        match self.pending.take() {
            Some(Terminal::Start) => self.start = Some(id),
            Some(Terminal::End) => self.end = Some(id),
            None => {}
        }
        Ok(())
    }

    fn tunnel(&mut self, line: usize, text: &str) -> InputResult<()> {
        if let Some(pending) = self.pending {
            return Err(pending.missing());
        }
        let mut names = text.split('-');
        let (Some(a), Some(b), None) = (names.next(), names.next(), names.next()) else {
            return Err(InputError::MalformedLine { line, text: text.to_owned() });
        };
        if a.is_empty() || b.is_empty() {
            return Err(InputError::MalformedLine { line, text: text.to_owned() });
        }

        self.builder.link(a, b).map_err(|e| match e {
            ColonyError::UnknownRoom(name) => InputError::UnknownRoom { line, name },
            ColonyError::DuplicateTunnel { a, b } => InputError::DuplicateTunnel { line, a, b },
            other => other.into(),
        })?;
        Ok(())
    }

    fn finish(self) -> InputResult<(usize, Colony, RoomId, RoomId)> {
        if let Some(pending) = self.pending {
            return Err(pending.missing());
        }
        let ant_count = self
            .ant_count
            .ok_or_else(|| InputError::InvalidAntCount("none given".to_owned()))?;
        let start = self.start.ok_or(InputError::MissingStart)?;
        let end = self.end.ok_or(InputError::MissingEnd)?;
        Ok((ant_count, self.builder.build(), start, end))
    }
}

fn parse_ant_count(line: usize, text: &str) -> InputResult<usize> {
    let count: usize = text
        .parse()
        .map_err(|_| InputError::InvalidAntCount(format!("{text:?} on line {line}")))?;
    if count == 0 {
        return Err(InputError::InvalidAntCount("at least one ant is required".to_owned()));
    }
    if count > MAX_ANTS {
        return Err(InputError::InvalidAntCount(format!("{count} exceeds {MAX_ANTS}")));
    }
    Ok(count)
}
