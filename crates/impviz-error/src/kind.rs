//! Error kinds for impviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers can match on the kind to report precisely which stage of the
/// pipeline gave up: indexing the project, talking to the analyzer,
/// rewriting the graph text, or rasterizing the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    // =========================================================================
    // Graph text errors
    // =========================================================================
    /// Failed to parse the analyzer's DOT output
    ParseFailed,

    /// Output of an external tool was not valid UTF-8
    EncodingError,

    /// A graph identifier has no entry in the module index
    ModuleNotFound,

    /// The rewritten graph is internally inconsistent
    GraphInvalid,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// Directory traversal failed
    TraversalFailed,

    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // External tool errors
    // =========================================================================
    /// The dependency analyzer could not be run or exited non-zero
    AnalyzerFailed,

    /// The graph renderer could not be run or exited non-zero
    RenderFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::AnalyzerFailed.to_string(), "AnalyzerFailed");
        assert_eq!(ErrorKind::ModuleNotFound.as_str(), "ModuleNotFound");
    }
}
