//! Core extraction engine.
//!
//! ## Pipeline
//!
//! ```text
//! file_scanner ──► extract ──► scope ──► aggregate ──► ids
//!   (walk)        (literals)  (catalog)   (tasks)     (names)
//! ```
//!
//! `RunContext` drives the stages and owns the run-wide state. Writing the
//! catalogs and rewriting sources is left to `crate::actions`.

pub mod aggregate;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod ids;
pub mod scope;

pub use aggregate::{CommonEntry, ReplacementTask, ScopeCatalogs};
pub use context::{Extraction, RunContext, find_unescaped_markup};
pub use data::{Occurrence, SourceLocation, SourceSyntax};
pub use ids::ResourceIdGenerator;
