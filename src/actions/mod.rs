//! Actions that write extraction results back to disk.
//!
//! Actions convert replacement tasks into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! ReplacementTask (ids assigned)
//!     ↓
//! Action (task → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file modification) / preview (dry-run)
//! ```
//!
//! ## Actions
//!
//! - [`WriteCatalog`]: Append entries to each scope's `strings.xml`
//! - [`ReplaceLiterals`]: Rewrite literals to resource references
//!
//! Catalogs are written before sources are rewritten.

mod operation;
mod replace_literals;
mod traits;
mod write_catalog;

pub use operation::{CatalogEntry, Operation, ReplaceOutcome};
pub use replace_literals::{ReplaceLiterals, replace_on_lines};
pub use traits::{Action, ActionStats};
pub use write_catalog::{WriteCatalog, merge_catalog};
