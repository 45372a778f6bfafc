//! Stage 5: Resource identifier minting.
//!
//! Identifiers follow `<base>_res_id_<index>_<timestamp>`:
//!
//! - unique entries use the stem of the file the literal came from and their
//!   index in the task's unique sequence;
//! - common entries use `<module>_common` (or `common_<n>` when the module name
//!   cannot be determined) and their index in the task's common sequence.
//!
//! All ids of a run share one timestamp, taken when the run starts.

use std::path::Path;

use super::aggregate::ReplacementTask;
use super::scope::module_name;

const ID_MARKER: &str = "_res_id_";
const COMMON_SUFFIX: &str = "_common";
const FALLBACK_COMMON_PREFIX: &str = "common_";

/// Mints identifiers for replacement tasks.
///
/// Holds the only mutable run-wide state: the counter for scopes whose module
/// name cannot be determined.
#[derive(Debug, Clone)]
pub struct ResourceIdGenerator {
    timestamp: i64,
    fallback_counter: usize,
}

impl ResourceIdGenerator {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            fallback_counter: 0,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn format_id(&self, base: &str, index: usize) -> String {
        format!("{}{}{}_{}", base, ID_MARKER, index, self.timestamp)
    }

    /// Prefix for common entries of the scope rooted at `scope_root`.
    ///
    /// Each call that falls back consumes a counter value.
    pub fn common_prefix(&mut self, scope_root: &Path) -> String {
        match module_name(scope_root) {
            Some(module) => format!("{}{}", module, COMMON_SUFFIX),
            None => {
                let prefix = format!("{}{}", FALLBACK_COMMON_PREFIX, self.fallback_counter);
                self.fallback_counter += 1;
                prefix
            }
        }
    }

    /// Assign ids to every entry of `task` and propagate common ids to their
    /// contributors.
    pub fn assign(&mut self, task: &mut ReplacementTask) {
        for (i, &idx) in task.unique_entries.iter().enumerate() {
            let occurrence = &mut task.source_entries[idx];
            let stem = occurrence
                .file_path()
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            occurrence.resource_id = Some(self.format_id(&stem, i));
        }

        if task.common_entries.is_empty() {
            return;
        }

        let prefix = self.common_prefix(&task.scope_root);
        for (i, entry) in task.common_entries.iter_mut().enumerate() {
            let id = self.format_id(&prefix, i);
            for &idx in &entry.sources {
                task.source_entries[idx].resource_id = Some(id.clone());
            }
            entry.resource_id = Some(id);
        }
    }
}
