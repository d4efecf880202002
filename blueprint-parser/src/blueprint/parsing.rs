//! Parsing module for the blueprint format
//!
//!     This module drives the complete pipeline from source text to a
//!     validated AST:
//!         1. Classification: each raw line becomes a processed record. See
//!            [lexing](crate::blueprint::lexing).
//!         2. Analysis: the indentation walk resolves each structural line's
//!            parent, validates the attachment and registers symbols. See
//!            [analyzer](analyzer).
//!         3. Recovery: structural errors resynchronize the walk at the next
//!            line that rejoins the failing context, so one malformed block
//!            never hides the rest of the file.
//!
//! Error Collection
//!
//!     The analyzer keeps walking after every error it can: structural errors
//!     skip to a synchronization point, semantic errors are absorbed in place.
//!     Callers always receive the complete (possibly pruned) tree plus every
//!     diagnostic in discovery order; the boolean result is merely "the
//!     diagnostic list is empty".
//!
//! Terminology
//!
//!     - parse: colloquial term for the entire run (classify + analyze)
//!     - analyze/analysis: the walk-and-validate phase specifically
//!     - synchronize: skipping forward after a structural error

pub mod analyzer;

pub use analyzer::Analyzer;

use crate::blueprint::ast::Ast;
use crate::blueprint::diagnostics::Diagnostic;

/// Everything a finished parse hands to the caller.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub ast: Ast,
    pub errors: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse in-memory source through a throwaway [`Analyzer`].
///
/// This is the primary entry point for callers that do not need to reuse the
/// analyzer or inspect its symbol table.
pub fn parse_document(source: &str) -> ParseOutcome {
    let mut analyzer = Analyzer::new();
    analyzer.parse_source(source);
    analyzer.into_outcome()
}
