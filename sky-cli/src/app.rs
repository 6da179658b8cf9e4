//! The read → parse → simulate → print pipeline.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use sky_core::config::SimConfig;
use sky_core::error::Result;
use sky_core::parse::parse_records;
use sky_core::point::PointField;
use sky_core::render::render_rows;
use sky_core::sim::Simulator;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about = "Finds the message spelled by converging star points", long_about = None)]
pub struct Options {
    /// Path to the point-record input file.
    #[clap(default_value = "points.txt")]
    pub input: PathBuf,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, parse(from_occurrences))]
    pub verbosity: usize,
}

/// Maps `-v` occurrences onto a log level filter.
fn level_for(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr terminal logger at the requested verbosity.
pub fn init_logging(verbosity: usize) {
    let _ = TermLogger::init(
        level_for(verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Runs the whole pipeline against the configured input file.
///
/// Any failure — unreadable file, malformed record, empty input, or a
/// non-convergent field — propagates out and terminates the process with
/// a non-zero exit code; there is no partial output.
pub fn run(opts: &Options) -> Result<()> {
    let input = fs::read_to_string(&opts.input)?;
    let points = parse_records(&input)?;
    info!("parsed {} points from {}", points.len(), opts.input.display());

    let simulator = Simulator::new(PointField::from_points(points), SimConfig::default())?;
    let result = simulator.run()?;
    info!("field converged after {} seconds", result.seconds);

    println!("[Part One] Message in the skies:");
    for row in render_rows(&result.points) {
        println!("{row}");
    }
    println!("[Part Two] Seconds used: {}", result.seconds);
    Ok(())
}
