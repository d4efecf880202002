//! Line classification for the blueprint format
//!
//!     Blueprint sources are processed line by line; there is no cross-line
//!     lexer state. Each raw line is turned into a [`ProcessedLine`] carrying
//!     its kind, its indentation measured in columns, its content with the
//!     indentation (and any marker) stripped, and its 1-based line number.
//!
//! Indentation Handling
//!
//!     One nesting level is 4 columns. A tab counts as 4 columns so that
//!     4-space and tab-indented files behave identically. The classifier only
//!     *measures* indentation; whether a given column is legal at a given
//!     point in the tree is decided later by the analyzer, which is also where
//!     non-multiple-of-4 columns surface as expected-vs-actual errors.
//!
//! Line Kinds
//!
//!     - Empty:      only whitespace; skipped by the analyzer.
//!     - Comment:    first content character is `#`; skipped.
//!     - Annotation: first content character is `@`; the trimmed text after
//!       the marker becomes the pending annotation for the next node.
//!     - Structural: everything else; handed to the node factory.

pub mod line_classification;

pub use line_classification::{classify_line, classify_source, LineKind, ProcessedLine};
