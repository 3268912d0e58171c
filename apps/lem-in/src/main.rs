//! lem-in: move an ant colony from `##start` to `##end`.
//!
//! Reads a colony description, echoes it, then prints one line per round
//! listing every move as `L<ant>-<room>`.
//!
//! ```text
//! lem-in colony.txt                      # echo + rounds on stdout
//! lem-in colony.txt --moves-csv out/     # also write out/moves.csv
//! RUST_LOG=debug lem-in colony.txt       # progress logs on stderr
//! ```

mod solve;


use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lem_colony::ColonyError;
use lem_core::ScheduleConfig;
use lem_input::{InputError, load_colony_file};

use solve::solve;

#[derive(Parser)]
#[command(name = "lem-in")]
#[command(about = "Schedule ants through a colony, one tunnel per ant per round")]
struct Cli {
    /// Colony description file.
    file: PathBuf,

    /// Also write moves.csv into this directory.
    #[arg(long, value_name = "DIR")]
    moves_csv: Option<PathBuf>,

    /// Fail once this many rounds have run.
    #[arg(long, value_name = "N")]
    max_rounds: Option<u32>,

    /// Print only the round lines.
    #[arg(long)]
    no_echo: bool,

    /// Print the total round count to stderr.
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let t0 = Instant::now();

    let input = load_colony_file(&cli.file)?;
    tracing::info!(
        ants  = input.ant_count,
        rooms = input.colony.room_count(),
        "colony loaded",
    );

    let config = ScheduleConfig {
        max_rounds:   cli.max_rounds,
        record_paths: false,
    };
    let solution = solve(&input, config, cli.moves_csv.as_deref())?;

    let mut out = BufWriter::new(io::stdout().lock());
    if !cli.no_echo {
        for line in &input.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    out.write_all(&solution.text)?;
    out.flush()?;

    if cli.summary {
        eprintln!("Total rounds: {}", solution.rounds);
    }
    tracing::info!(
        rounds     = solution.rounds,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "done",
    );
    Ok(())
}

/// The single line printed for a failed run.
fn report(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<InputError>() {
        if e.is_format() {
            return format!("ERROR: invalid data format, {e}");
        }
    }
    if let Some(ColonyError::Unreachable { .. }) = err.downcast_ref::<ColonyError>() {
        return "ERROR: invalid data format, no path between start and end".to_owned();
    }
    format!("ERROR: {err}")
}
