use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use crate::config::FilterList;

/// Result of scanning files.
pub struct ScanResult {
    /// Candidate files in lexicographic traversal order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Enumerate candidate files under `base_dir`.
///
/// Directories are visited in file-name order so that identifier assignment
/// is reproducible on an unchanged tree. Excluded directories are pruned
/// without being descended into; the root itself is never excluded.
pub fn scan_files(base_dir: &Path, filter: &FilterList, verbose: bool) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, filter));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if filter.is_ignored_file(&file_name) {
            continue;
        }

        files.push(entry.into_path());
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_excluded_dir(entry: &DirEntry, filter: &FilterList) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && filter.is_ignored_dir(&entry.file_name().to_string_lossy())
}
