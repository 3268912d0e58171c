//! One end-to-end run: reachability check, labelling, scheduling, output.

use std::path::Path;

use anyhow::Result;

use lem_colony::{DistanceFinder, HeapDistanceFinder};
use lem_core::ScheduleConfig;
use lem_input::ColonyInput;
use lem_output::{CsvWriter, MoveOutputObserver, MoveWriter, TextWriter};
use lem_sched::SchedulerBuilder;

/// Rendered round lines plus the round count.
pub struct Solution {
    pub text:   Vec<u8>,
    pub rounds: usize,
}

/// Schedule every ant of `input`.
///
/// The start-rooted search only settles reachability.  Ants are steered by
/// a second search rooted at end, so each label is a room's hop count to
/// the goal.  With `csv_dir` set, moves are also written to
/// `<csv_dir>/moves.csv`.
pub fn solve(input: &ColonyInput, config: ScheduleConfig, csv_dir: Option<&Path>) -> Result<Solution> {
    let colony = &input.colony;
    let finder = HeapDistanceFinder;

    let forward = finder.distances(colony, input.start, input.end)?;
    tracing::debug!(reached = forward.reached_count(), "end is reachable");
    let labels = finder.distances(colony, input.end, input.start)?;

    let mut text = Vec::new();
    let rounds = {
        let mut writers: Vec<Box<dyn MoveWriter + '_>> = vec![Box::new(TextWriter::new(&mut text))];
        if let Some(dir) = csv_dir {
            writers.push(Box::new(CsvWriter::new(dir)?));
        }
        let mut observer = MoveOutputObserver::new(writers);

        let schedule = SchedulerBuilder::new(config, colony, &labels)
            .ants(input.ant_count)
            .terminals(input.start, input.end)
            .build()?
            .run(&mut observer)?;

        if let Some(e) = observer.take_error() {
            return Err(e.into());
        }
        schedule.round_count()
    };

    Ok(Solution { text, rounds })
}
