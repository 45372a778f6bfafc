//! CLI argument definitions using clap.
//!
//! `extres` runs a single pipeline, so there are no subcommands: the project
//! root is a required positional argument and everything else is an option.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan
    pub root: PathBuf,

    /// Filter list file (default: ./filterlist.txt, then next to the executable)
    #[arg(long, env = "EXTRES_FILTER_LIST")]
    pub filter_list: Option<PathBuf>,

    /// Show the planned catalog entries and replacements without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Unix timestamp used in generated ids instead of the current time
    #[arg(long, env = "EXTRES_RUN_TIMESTAMP", hide = true)]
    pub timestamp: Option<i64>,
}
