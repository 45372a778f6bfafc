use std::{
    collections::HashSet,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

pub const FILTER_FILE_NAME: &str = "filterlist.txt";

/// Extensions of files that may contain extractable literals.
pub const SCANNED_EXTENSIONS: &[&str] = &["java", "xml"];

/// Exclusion rules loaded from the filter list file.
///
/// File format, one rule per line:
///
/// ```text
/// # comment
/// --Test          filename prefix (skips TestUtils.java, TestActivity.java)
/// **build         directory name (skips every directory named `build`)
/// BuildConfig     exact filename without extension
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterList {
    /// Exact names (part before the first `.`) of files to skip.
    pub file_names: HashSet<String>,
    /// Name prefixes of files to skip.
    pub prefixes: Vec<String>,
    /// Directory names to skip, at any depth.
    pub dir_names: HashSet<String>,
}

impl FilterList {
    pub fn parse(content: &str) -> Self {
        let mut filter = FilterList::default();

        for line in content.lines() {
            let rule = line.trim();
            if rule.is_empty() || rule.starts_with('#') {
                continue;
            }
            if let Some(prefix) = rule.strip_prefix("--") {
                filter.prefixes.push(prefix.to_string());
            } else if let Some(dir) = rule.strip_prefix("**") {
                filter.dir_names.insert(dir.to_string());
            } else {
                filter.file_names.insert(rule.to_string());
            }
        }

        filter
    }

    pub fn is_ignored_dir(&self, dir_name: &str) -> bool {
        self.dir_names.contains(dir_name)
    }

    /// Check whether a file is skipped, by extension or by filter rule.
    pub fn is_ignored_file(&self, file_name: &str) -> bool {
        let has_scanned_ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| SCANNED_EXTENSIONS.contains(&ext));
        if !has_scanned_ext {
            return true;
        }

        let name = file_name.split('.').next().unwrap_or_default();
        if self.prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            return true;
        }

        self.file_names.contains(name)
    }
}

/// Find the filter list, checking the current directory first and then the
/// directory holding the executable.
pub fn find_filter_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(FILTER_FILE_NAME));
    }
    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(dir.join(FILTER_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Result of loading the filter list.
pub struct FilterLoadResult {
    pub filter: FilterList,
    /// The file the rules came from, or `None` if no filter list was found.
    pub source: Option<PathBuf>,
}

/// Load the filter list.
///
/// An explicitly given path must exist. Without one, a missing filter list
/// means "exclude nothing but unsupported extensions".
pub fn load_filter_list(explicit: Option<&Path>) -> Result<FilterLoadResult> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("Filter list not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => find_filter_file(),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read filter list: {}", path.display()))?;
            Ok(FilterLoadResult {
                filter: FilterList::parse(&content),
                source: Some(path),
            })
        }
        None => Ok(FilterLoadResult {
            filter: FilterList::default(),
            source: None,
        }),
    }
}
