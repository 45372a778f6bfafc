//! Extract command - move Chinese literals into string catalogs.
//!
//! Runs the whole pipeline: scan, aggregate, mint ids, then write catalogs and
//! rewrite sources. With `--dry-run` nothing is written; the planned changes
//! are previewed by the reporter instead.

use anyhow::Result;

use super::{CommandResult, ExtractSummary, finish};
use crate::{
    actions::{Action, ActionStats, ReplaceLiterals, WriteCatalog},
    cli::args::Arguments,
    core::{Extraction, RunContext, find_unescaped_markup},
};

pub fn extract(args: Arguments) -> Result<CommandResult> {
    let mut ctx = RunContext::new(&args)?;

    let Extraction {
        catalogs,
        mut issues,
        files_with_literals,
        occurrence_count,
    } = ctx.extract()?;

    let tasks = ctx.build_tasks(catalogs);
    issues.extend(find_unescaped_markup(&tasks));

    let (catalog_stats, replace_stats) = if ctx.dry_run || tasks.is_empty() {
        (ActionStats::default(), ActionStats::default())
    } else {
        let catalog_stats = WriteCatalog::run(&tasks)?;
        let mut replace_stats = ReplaceLiterals::run(&tasks)?;
        issues.extend(replace_stats.unmatched.drain(..).map(Into::into));
        (catalog_stats, replace_stats)
    };

    let summary = ExtractSummary {
        dry_run: ctx.dry_run,
        files_scanned: ctx.files.len(),
        files_with_literals,
        occurrence_count,
        unique_count: tasks.iter().map(|t| t.unique_entries.len()).sum(),
        common_count: tasks.iter().map(|t| t.common_entries.len()).sum(),
        catalogs: catalog_stats,
        replacements: replace_stats,
        tasks,
    };

    Ok(finish(summary, issues, ctx.skipped_count))
}
