use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;

use crate::{
    cli::args::Arguments,
    config::load_filter_list,
    core::{
        aggregate::{ReplacementTask, ScopeCatalogs},
        extract::scan_source,
        file_scanner::scan_files,
        ids::ResourceIdGenerator,
        scope::module_source_root,
    },
    issues::{Issue, UnescapedMarkupIssue, UnreadableFileIssue, UnscopedLiteralIssue},
    utils::strip_outer_quotes,
};

/// Output of the extraction stages: occurrences grouped per scope, plus the
/// findings made along the way.
pub struct Extraction {
    pub catalogs: ScopeCatalogs,
    pub issues: Vec<Issue>,
    /// Files that yielded at least one occurrence (scoped or not).
    pub files_with_literals: usize,
    /// Scoped occurrences, i.e. every occurrence that will be rewritten.
    pub occurrence_count: usize,
}

/// Run-wide state passed through the pipeline.
///
/// Built once per invocation. The candidate file list and the run timestamp are
/// fixed at construction; the identifier generator's fallback counter is the
/// only state that changes afterwards.
pub struct RunContext {
    /// Project root as given on the command line.
    pub root_dir: PathBuf,

    /// Candidate files in traversal order.
    pub files: Vec<PathBuf>,

    /// Filter list the exclusions came from, if any.
    pub filter_source: Option<PathBuf>,

    /// Paths the walker could not access.
    pub skipped_count: usize,

    pub dry_run: bool,

    pub verbose: bool,

    ids: ResourceIdGenerator,
}

impl RunContext {
    pub fn new(args: &Arguments) -> Result<Self> {
        let root_dir = args.root.clone();
        if !root_dir.is_dir() {
            bail!("Project root is not a directory: {}", root_dir.display());
        }

        let filter = load_filter_list(args.filter_list.as_deref())?;
        if args.verbose {
            match &filter.source {
                Some(path) => eprintln!("Using filter list {}", path.display()),
                None => eprintln!(
                    "{} no filter list found, only extensions are filtered",
                    "note:".bold()
                ),
            }
        }

        let scan = scan_files(&root_dir, &filter.filter, args.verbose);
        let timestamp = args
            .timestamp
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        Ok(Self {
            root_dir,
            files: scan.files,
            filter_source: filter.source,
            skipped_count: scan.skipped_count,
            dry_run: args.dry_run,
            verbose: args.verbose,
            ids: ResourceIdGenerator::new(timestamp),
        })
    }

    pub fn timestamp(&self) -> i64 {
        self.ids.timestamp()
    }

    /// Scan every candidate file and group its occurrences by scope.
    ///
    /// Files are read whole and decoded as UTF-8; a file that fails to decode
    /// is reported and skipped, any other read failure aborts the run.
    pub fn extract(&self) -> Result<Extraction> {
        let mut catalogs = ScopeCatalogs::new();
        let mut issues = Vec::new();
        let mut files_with_literals = 0;
        let mut occurrence_count = 0;

        for file_path in &self.files {
            let Some(content) = read_source(file_path, &mut issues)? else {
                continue;
            };
            if self.verbose {
                eprintln!("Scanning {}", file_path.display());
            }

            let scope = module_source_root(file_path);
            let mut found = false;
            for occurrence in scan_source(file_path, &content) {
                found = true;
                match &scope {
                    Some(scope_root) => {
                        occurrence_count += 1;
                        catalogs.add(scope_root, occurrence);
                    }
                    None => issues.push(UnscopedLiteralIssue { occurrence }.into()),
                }
            }
            if found {
                files_with_literals += 1;
            }
        }

        Ok(Extraction {
            catalogs,
            issues,
            files_with_literals,
            occurrence_count,
        })
    }

    /// Turn scope groups into tasks with every identifier assigned.
    pub fn build_tasks(&mut self, catalogs: ScopeCatalogs) -> Vec<ReplacementTask> {
        let mut tasks = catalogs.into_tasks();
        for task in &mut tasks {
            self.ids.assign(task);
        }
        tasks
    }
}

/// Read a candidate file, turning undecodable content into an issue.
fn read_source(file_path: &Path, issues: &mut Vec<Issue>) -> Result<Option<String>> {
    let bytes = fs::read(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(content)),
        Err(err) => {
            issues.push(
                UnreadableFileIssue {
                    file_path: file_path.to_path_buf(),
                    error: format!("not valid UTF-8 ({})", err.utf8_error()),
                }
                .into(),
            );
            Ok(None)
        }
    }
}

/// Catalog text is written without escaping; flag entries that XML would
/// misread.
pub fn find_unescaped_markup(tasks: &[ReplacementTask]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for task in tasks {
        let unique = task.unique();
        let common = task
            .common_entries
            .iter()
            .filter_map(|entry| task.sources_of(entry).next());

        for occurrence in unique.chain(common) {
            let text = strip_outer_quotes(&occurrence.value);
            if !text.contains(['<', '&']) {
                continue;
            }
            let Some(resource_id) = occurrence.resource_id.clone() else {
                continue;
            };
            issues.push(
                UnescapedMarkupIssue {
                    occurrence: occurrence.clone(),
                    resource_id,
                    catalog_path: task.catalog_path.clone(),
                }
                .into(),
            );
        }
    }

    issues
}
