use std::path::Path;

/// File syntax of a scanned source file, selecting the reference expression
/// that replaces an extracted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSyntax {
    /// Java source: `getString(R.string.<id>)`
    Program,
    /// Android XML: `"@string/<id>"`
    Markup,
}

impl SourceSyntax {
    /// Determine the syntax from a file extension.
    ///
    /// Unknown extensions fall back to `Program`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("xml") => SourceSyntax::Markup,
            _ => SourceSyntax::Program,
        }
    }

    /// Returns true if this is markup syntax.
    pub fn is_markup(&self) -> bool {
        matches!(self, SourceSyntax::Markup)
    }

    /// Format the expression referencing `resource_id`.
    pub fn reference(&self, resource_id: &str) -> String {
        match self {
            SourceSyntax::Program => format!("getString(R.string.{})", resource_id),
            SourceSyntax::Markup => format!("\"@string/{}\"", resource_id),
        }
    }
}
