//! Testing utilities for blueprint parsing
//!
//!     Blueprint is a novel format: there is no established body of source
//!     text to test against, and hand-typing sources in every test file is
//!     how subtly-wrong inputs sneak in. Tests should therefore prefer the
//!     verified sources in [`samples`] over ad-hoc strings, and only write a
//!     custom string when the test is *about* that exact malformation.
//!
//! Helpers
//!
//!     [`parse_clean`] parses a source that is expected to be well-formed and
//!     panics with the diagnostics otherwise; [`error_strings`] parses a
//!     source that is expected to be broken and returns the rendered
//!     diagnostics for assertions.

use crate::blueprint::ast::Ast;
use crate::blueprint::parsing::parse_document;

/// Verified blueprint sources used across the test suites.
pub mod samples {
    /// A complete well-formed document exercising every node kind.
    pub const KITCHEN_SINK: &str = "\
# geometry sketch
module geometry
    desc planar primitives

@ value object
class Point
    desc a point in the plane
    var x
    var y
    desc vertical coordinate

class Circle
    inh Shape
    var radius

    func area
        desc area from the radius
        input precision
        output value
        behavior
            square the radius
            multiply by pi
            if precision is given
                round the result
            else
                keep full precision

    func scale
        input factor
        behavior
            multiply radius by factor
";

    /// Two sibling variables sharing one name inside a class scope.
    pub const DUPLICATE_VARS: &str = "\
class Config
    var retries
    var retries
";

    /// A class whose first member line is malformed, followed by a
    /// correctly-indented sibling member.
    pub const MALFORMED_MEMBER: &str = "\
class Widget
    func
    var label
";

    /// A function declaring an input after its output.
    pub const INPUT_AFTER_OUTPUT: &str = "\
class Math
    func add
        input left
        output sum
        input right
        behavior
            add the operands
";
}

/// Parse a source expected to be clean; panic with diagnostics otherwise.
pub fn parse_clean(source: &str) -> Ast {
    let outcome = parse_document(source);
    assert!(
        outcome.success(),
        "expected a clean parse, got: {:?}",
        outcome.errors
    );
    outcome.ast
}

/// Parse a source expected to be broken; return the rendered diagnostics.
pub fn error_strings(source: &str) -> Vec<String> {
    parse_document(source)
        .errors
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect()
}
