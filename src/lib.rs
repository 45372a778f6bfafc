//! extres - extract hardcoded Chinese text from Android projects
//!
//! extres scans `.java` and `.xml` sources for quoted literals containing CJK
//! ideographs, appends them to the owning module's `res/values/strings.xml`,
//! and rewrites each literal into a reference to its new string resource.
//!
//! ## Module Structure
//!
//! - `actions`: Catalog writing and source rewriting (with dry-run preview)
//! - `cli`: Command-line interface layer
//! - `config`: Filter list loading and parsing
//! - `core`: Scanning, scope resolution, aggregation and id minting
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
