//! Stage 4: Aggregation - grouping occurrences into per-catalog tasks.
//!
//! Occurrences are grouped first by scope, then by exact literal value, both in
//! first-seen order. Each scope becomes one `ReplacementTask`:
//!
//! ```text
//! ScopeCatalogs
//!   scope_root ──► value ──► [Occurrence, ...]
//!          │
//!          ▼ into_tasks()
//! ReplacementTask
//!   source_entries  [o0, o1, o2, o3]        every occurrence, rewrite order
//!   unique_entries  [0]                     value seen once    -> o0
//!   common_entries  [{"好", sources [1,2,3]}] value seen 2+ times -> o1..o3
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use super::data::Occurrence;
use super::scope::catalog_path;

/// Occurrences sharing one literal value within a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup {
    pub value: String,
    pub occurrences: Vec<Occurrence>,
}

/// All occurrences of one scope, grouped by value.
#[derive(Debug, Clone)]
pub struct ScopeEntries {
    pub scope_root: PathBuf,
    groups: Vec<ValueGroup>,
    index: HashMap<String, usize>,
}

impl ScopeEntries {
    fn new(scope_root: PathBuf) -> Self {
        Self {
            scope_root,
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, occurrence: Occurrence) {
        match self.index.get(&occurrence.value) {
            Some(&idx) => self.groups[idx].occurrences.push(occurrence),
            None => {
                self.index
                    .insert(occurrence.value.clone(), self.groups.len());
                self.groups.push(ValueGroup {
                    value: occurrence.value.clone(),
                    occurrences: vec![occurrence],
                });
            }
        }
    }

    pub fn groups(&self) -> &[ValueGroup] {
        &self.groups
    }

    pub fn get(&self, value: &str) -> Option<&ValueGroup> {
        self.index.get(value).map(|&idx| &self.groups[idx])
    }
}

/// Run-wide scope → value → occurrences index, built while files are scanned.
#[derive(Debug, Clone, Default)]
pub struct ScopeCatalogs {
    scopes: Vec<ScopeEntries>,
    index: HashMap<PathBuf, usize>,
}

impl ScopeCatalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence under the scope rooted at `scope_root`.
    pub fn add(&mut self, scope_root: &Path, occurrence: Occurrence) {
        let idx = match self.index.get(scope_root) {
            Some(&idx) => idx,
            None => {
                self.index.insert(scope_root.to_path_buf(), self.scopes.len());
                self.scopes.push(ScopeEntries::new(scope_root.to_path_buf()));
                self.scopes.len() - 1
            }
        };
        self.scopes[idx].add(occurrence);
    }

    pub fn scopes(&self) -> &[ScopeEntries] {
        &self.scopes
    }

    pub fn get(&self, scope_root: &Path) -> Option<&ScopeEntries> {
        self.index.get(scope_root).map(|&idx| &self.scopes[idx])
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Build one replacement task per scope, in first-seen scope order.
    pub fn into_tasks(self) -> Vec<ReplacementTask> {
        self.scopes
            .into_iter()
            .map(ReplacementTask::from_scope)
            .collect()
    }
}

/// Catalog-only record for a value that occurs two or more times in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonEntry {
    pub value: String,
    pub resource_id: Option<String>,
    /// Indices into `ReplacementTask::source_entries` of every contributor.
    pub sources: Vec<usize>,
}

/// Everything needed to update one catalog and the sources that reference it.
///
/// `source_entries` owns every occurrence; unique and common entries refer to
/// it by index, so each occurrence is reachable through exactly one entry.
#[derive(Debug, Clone)]
pub struct ReplacementTask {
    pub scope_root: PathBuf,
    pub catalog_path: PathBuf,
    pub source_entries: Vec<Occurrence>,
    pub unique_entries: Vec<usize>,
    pub common_entries: Vec<CommonEntry>,
}

impl ReplacementTask {
    pub fn from_scope(scope: ScopeEntries) -> Self {
        let catalog_path = catalog_path(&scope.scope_root);
        let mut task = ReplacementTask {
            scope_root: scope.scope_root,
            catalog_path,
            source_entries: Vec::new(),
            unique_entries: Vec::new(),
            common_entries: Vec::new(),
        };

        for group in scope.groups {
            let start = task.source_entries.len();
            let count = group.occurrences.len();
            task.source_entries.extend(group.occurrences);

            match count {
                0 => {}
                1 => task.unique_entries.push(start),
                _ => task.common_entries.push(CommonEntry {
                    value: group.value,
                    resource_id: None,
                    sources: (start..start + count).collect(),
                }),
            }
        }

        task
    }

    /// Occurrences whose value appears exactly once in the scope.
    pub fn unique(&self) -> impl Iterator<Item = &Occurrence> {
        self.unique_entries.iter().map(|&i| &self.source_entries[i])
    }

    /// Contributors behind a common entry.
    pub fn sources_of<'a>(&'a self, entry: &'a CommonEntry) -> impl Iterator<Item = &'a Occurrence> {
        entry.sources.iter().map(|&i| &self.source_entries[i])
    }

    /// Each common entry paired with its full contributor list.
    pub fn common_to_sources(&self) -> impl Iterator<Item = (&CommonEntry, Vec<&Occurrence>)> {
        self.common_entries
            .iter()
            .map(|entry| (entry, self.sources_of(entry).collect()))
    }

    pub fn entry_count(&self) -> usize {
        self.unique_entries.len() + self.common_entries.len()
    }
}
