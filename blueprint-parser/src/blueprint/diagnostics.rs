//! Diagnostic collection for parse reporting
//!
//! The analyzer never aborts on the first problem: every structural or semantic
//! issue it encounters is appended here, in discovery order, and the walk
//! continues. A parse is successful exactly when this list is empty at the end
//! of the run.
//!
//! Three disjoint families exist:
//!   - `Io`: the file could not be read at all. Short-circuits the parse.
//!   - `Structural`: indentation or nesting violations. Recovered via the
//!     analyzer's synchronization scan.
//!   - `Semantic`: naming violations (duplicate symbols, replaced annotations).
//!     Absorbed in place, no recovery needed.

use std::fmt;

/// The family a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Io,
    Structural,
    Semantic,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Io => write!(f, "io"),
            DiagnosticKind::Structural => write!(f, "structural"),
            DiagnosticKind::Semantic => write!(f, "semantic"),
        }
    }
}

/// A single line-numbered problem report.
///
/// `line` is 1-based and absent only for I/O failures, which have no source
/// position. Rendering via `Display` embeds the line number in the message.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Io,
            line: None,
            message: message.into(),
        }
    }

    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Structural,
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn semantic(line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Semantic,
            line: Some(line),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
