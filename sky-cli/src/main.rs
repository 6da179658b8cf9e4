//! Command-line front end for the star-point simulator.
//!
//! This binary parses the options, sets up logging, and delegates the
//! read → parse → simulate → print pipeline to the [`app`] module.

mod app;

use std::process::ExitCode;

use clap::Parser;

use app::Options;

fn main() -> ExitCode {
    let opts = Options::parse();
    app::init_logging(opts.verbosity);

    match app::run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
