//! Stage 3: Scope resolution.
//!
//! A scope is a module's source root (`<module>/src/main`) and owns exactly one
//! string catalog. Files outside such a layout have no catalog target.

use std::path::{Component, Path, PathBuf};

/// Catalog location relative to a module source root.
pub const CATALOG_RELATIVE_PATH: &str = "res/values/strings.xml";

const SOURCE_DIR: &str = "src";
const MAIN_DIR: &str = "main";

/// Find the nearest `src/main` ancestor of `file_path`.
///
/// The `src` directory must itself have a parent component, so a path that
/// starts with `src/main/` has no scope.
pub fn module_source_root(file_path: &Path) -> Option<PathBuf> {
    let components: Vec<Component> = file_path.parent()?.components().collect();

    let main_idx = (1..components.len()).rev().find(|&i| {
        i >= 2
            && components[i] == Component::Normal(MAIN_DIR.as_ref())
            && components[i - 1] == Component::Normal(SOURCE_DIR.as_ref())
    })?;

    Some(components[..=main_idx].iter().collect())
}

/// Catalog file for a module source root.
pub fn catalog_path(scope_root: &Path) -> PathBuf {
    scope_root.join(CATALOG_RELATIVE_PATH)
}

/// Name of the module directory enclosing `src/main`, if it is a plain
/// directory name.
pub fn module_name(scope_root: &Path) -> Option<String> {
    match scope_root.parent()?.parent()?.components().next_back()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}
