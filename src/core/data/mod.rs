//! Core data types used across all pipeline stages.
//!
//! ## Module Structure
//!
//! - `source`: Literal site types (SourceLocation, Occurrence)
//! - `syntax`: SourceSyntax enum (Java vs XML reference expressions)

pub mod source;
pub mod syntax;

pub use source::{Occurrence, SourceLocation};
pub use syntax::SourceSyntax;
