//! `waypoint <grid-file> <strategy> [heuristic] [--max-iterations N]`
//!
//! Prints the grid, six statistics lines, then the grid with the path
//! overlaid. Exit status: 0 path found, 1 no path, 2 bad arguments or grid.
//! Set `RUST_LOG=debug` for search tracing on stderr.

use std::process::ExitCode;

use clap::Parser;
use waypoint_harness::config::RunConfig;
use waypoint_harness::render::render_grid;
use waypoint_harness::runner::run_config;

fn main() -> ExitCode {
    env_logger::init();

    let config = match RunConfig::try_parse() {
        Ok(config) => config,
        // --help and --version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{}", err.render());
            return ExitCode::from(2);
        }
    };
    match run_config(&config) {
        Ok((fixture, report)) => {
            println!("{}", render_grid(&fixture.grid));
            print!("{}", report.summary());
            println!("{}", report.rendered);
            if report.found() {
                ExitCode::SUCCESS
            } else {
                log::info!("no path: {}", report.result.termination);
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
