//! Command-line interface layer.

use std::time::Instant;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let start = Instant::now();
    let verbose = args.verbose;

    let result = commands::extract::extract(args)?;
    report::print(&result, verbose);
    report::print_elapsed(start.elapsed());

    Ok(ExitStatus::Success)
}
