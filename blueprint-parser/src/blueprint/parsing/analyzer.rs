//! Analyzer - the indentation walk, validation and error recovery
//!
//! The walk keeps two cursors: `current`, the node whose block the incoming
//! line is measured against, and `last_added`, the most recently attached
//! node, which is where a deeper indent tries to nest. For every structural
//! line:
//!
//!   1. Ascend: while the line sits left of `current`'s block, move `current`
//!      to its parent, popping one symbol scope for each class or function
//!      left behind. A single dedent may ascend several levels.
//!   2. Relate: a line on `current`'s block column attaches to `current`; a
//!      line right of it tries to nest under `last_added`, which must accept
//!      children and whose block column the line must hit exactly.
//!   3. Construct: the factory builds a node from the line and the pending
//!      annotation; unrecognized lines are structural errors.
//!   4. Validate: the attachment contract of the resolved parent decides
//!      whether the new node may follow the sibling already in place.
//!   5. Attach, then record the declared symbol (conflicts are non-fatal)
//!      and open a scope when the node is a class or function.
//!
//! Any structural failure in steps 2-4 appends a diagnostic and then skips
//! forward to the next non-empty, non-comment line at or left of the failing
//! block column; that line re-enters the walk at step 1. Everything inside
//! the abandoned block is deliberately not reported line by line - the next
//! block is assumed independent of the failed one.

use std::fs;
use std::path::Path;

use crate::blueprint::ast::{grammar, Ast, NodeId, NodeKind};
use crate::blueprint::building;
use crate::blueprint::diagnostics::Diagnostic;
use crate::blueprint::lexing::{classify_source, LineKind, ProcessedLine};
use crate::blueprint::parsing::ParseOutcome;
use crate::blueprint::symbols::SymbolTable;

/// Single-pass parser for blueprint sources.
///
/// One instance is reusable: every `parse_*` call fully resets the tree, the
/// symbol table and the diagnostics before walking the new input.
pub struct Analyzer {
    ast: Ast,
    symbols: SymbolTable,
    errors: Vec<Diagnostic>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            ast: Ast::new(),
            symbols: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    /// Parse a file. An unreadable file is a single fatal diagnostic; no
    /// partial parse is attempted. Returns true iff no diagnostics were
    /// recorded.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> bool {
        self.reset();
        let path = path.as_ref();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                self.errors
                    .push(Diagnostic::io(format!("cannot read '{}': {}", path.display(), err)));
                return false;
            }
        };
        self.walk(&source);
        self.errors.is_empty()
    }

    /// Parse in-memory source. Same contract as [`parse_file`](Self::parse_file)
    /// without the I/O boundary.
    pub fn parse_source(&mut self, source: &str) -> bool {
        self.reset();
        self.walk(source);
        self.errors.is_empty()
    }

    /// The tree produced by the last parse.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Diagnostics of the last parse, in discovery order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// The symbol table as left by the last parse (back at the root scope).
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consume the analyzer, handing tree and diagnostics to the caller.
    pub fn into_outcome(self) -> ParseOutcome {
        ParseOutcome {
            ast: self.ast,
            errors: self.errors,
        }
    }

    fn reset(&mut self) {
        self.ast = Ast::new();
        self.symbols = SymbolTable::new();
        self.errors.clear();
    }

    fn walk(&mut self, source: &str) {
        let lines = classify_source(source);
        let mut cursor = 0;
        let mut current = self.ast.root();
        let mut last_added = self.ast.root();
        let mut pending: Option<String> = None;

        while cursor < lines.len() {
            let line = &lines[cursor];
            match line.kind {
                LineKind::Empty | LineKind::Comment => {
                    cursor += 1;
                    continue;
                }
                LineKind::Annotation => {
                    if pending.is_some() {
                        self.errors.push(Diagnostic::semantic(
                            line.line_number,
                            "annotation replaces an earlier annotation that was never attached",
                        ));
                    }
                    pending = Some(line.content.clone());
                    cursor += 1;
                    continue;
                }
                LineKind::Structural => {}
            }

            let indent = line.indent as i32;

            // Step 1: ascend out of every block the line has dedented past.
            while indent < self.ast.child_indent(current) {
                if self.ast[current].kind.defines_scope() {
                    self.symbols.pop_scope();
                }
                match self.ast[current].parent {
                    Some(parent) => current = parent,
                    None => break,
                }
            }

            // Step 2: relate the line to the current block.
            let block = self.ast.child_indent(current);
            if indent > block {
                // An attempt to nest under the most recently attached node.
                let host = last_added;
                if !grammar::accepts_children(self.ast[host].kind) {
                    self.errors.push(Diagnostic::structural(
                        line.line_number,
                        format!("'{}' cannot contain nested declarations", self.ast[host].kind),
                    ));
                    cursor = self.synchronize(&lines, cursor, current);
                    continue;
                }
                let required = self.ast.child_indent(host);
                if indent != required {
                    self.errors.push(Diagnostic::structural(
                        line.line_number,
                        format!("expected indentation of {}, found {}", required, indent),
                    ));
                    cursor = self.synchronize(&lines, cursor, current);
                    continue;
                }
                current = host;
            } else if indent < block {
                self.errors.push(Diagnostic::structural(
                    line.line_number,
                    format!("indentation {} does not align with any enclosing block", indent),
                ));
                cursor = self.synchronize(&lines, cursor, current);
                continue;
            }

            // Step 3: construct a node from the line.
            let node = match building::build_node(line, pending.as_deref()) {
                Some(node) => node,
                None => {
                    self.errors.push(Diagnostic::structural(
                        line.line_number,
                        format!("unrecognized declaration '{}'", line.content),
                    ));
                    cursor = self.synchronize(&lines, cursor, current);
                    continue;
                }
            };

            // Step 4: ask the parent's contract whether the node may attach.
            if !grammar::can_attach(&self.ast, current, node.kind) {
                self.errors.push(Diagnostic::structural(
                    line.line_number,
                    format!(
                        "'{}' is not allowed in '{}' at this position",
                        node.kind, self.ast[current].kind
                    ),
                ));
                cursor = self.synchronize(&lines, cursor, current);
                continue;
            }

            // Step 5: attach and update the walk state.
            let id = self.ast.attach(current, node);
            self.propagate_description(current, id);
            last_added = id;
            pending = None;

            // Step 6: scope bookkeeping. Registration happens in the scope
            // enclosing the declaration; the node's own scope opens after.
            let kind = self.ast[id].kind;
            if kind.declares_symbol() {
                if let Some(name) = self.ast[id].name.clone() {
                    if let Err(existing) = self.symbols.register(&name, id) {
                        let first_line = self.ast[existing.node].line;
                        self.errors.push(Diagnostic::semantic(
                            line.line_number,
                            format!(
                                "duplicate symbol '{}' in scope '{}' (first declared on line {})",
                                name,
                                self.symbols.active_scope().name(),
                                first_line
                            ),
                        ));
                    }
                }
            }
            if kind.defines_scope() {
                let scope_name = self.ast[id]
                    .name
                    .clone()
                    .unwrap_or_else(|| kind.to_string());
                self.symbols.push_scope(scope_name);
            }

            cursor += 1;
        }

        // Unwind whatever scopes are still open at end of input so the table
        // is back at the root scope.
        while self.symbols.depth() > 1 {
            self.symbols.pop_scope();
        }
    }

    /// Find the line to resume at after a structural error: the first
    /// non-empty, non-comment line after the failing one that sits at or
    /// left of the failing block's column. Returns `lines.len()` when no
    /// such line exists, ending the walk.
    fn synchronize(&self, lines: &[ProcessedLine], failed: usize, context: NodeId) -> usize {
        let block = self.ast.child_indent(context);
        let mut index = failed + 1;
        while index < lines.len() {
            let line = &lines[index];
            let skippable = matches!(line.kind, LineKind::Empty | LineKind::Comment);
            if !skippable && (line.indent as i32) <= block {
                return index;
            }
            index += 1;
        }
        lines.len()
    }

    /// Mirror an attached description into the metadata of the node it
    /// documents: the member it directly follows, otherwise its parent.
    fn propagate_description(&mut self, parent: NodeId, id: NodeId) {
        if self.ast[id].kind != NodeKind::Description {
            return;
        }
        let text = self.ast[id].content.clone();
        let siblings = &self.ast[parent].children;
        let target = if siblings.len() >= 2 {
            let preceding = siblings[siblings.len() - 2];
            if matches!(
                self.ast[preceding].kind,
                NodeKind::Class | NodeKind::Func | NodeKind::Var
            ) {
                preceding
            } else {
                parent
            }
        } else {
            parent
        };
        self.ast[target].metadata.description = Some(text);
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_parses_clean() {
        let mut analyzer = Analyzer::new();
        assert!(analyzer.parse_source(""));
        assert_eq!(analyzer.ast().len(), 1);
        assert!(analyzer.errors().is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let mut analyzer = Analyzer::new();
        let ok = analyzer.parse_source("# header\n\nclass A\n    # inside\n    var x\n");
        assert!(ok, "diagnostics: {:?}", analyzer.errors());
        let root = analyzer.ast().root();
        assert_eq!(analyzer.ast()[root].children.len(), 1);
    }

    #[test]
    fn test_single_class_with_member() {
        let mut analyzer = Analyzer::new();
        assert!(analyzer.parse_source("class A\n    var x\n"));
        let ast = analyzer.ast();
        let class = ast[ast.root()].children[0];
        assert_eq!(ast[class].kind, NodeKind::Class);
        assert_eq!(ast[class].indent, 0);
        let var = ast[class].children[0];
        assert_eq!(ast[var].kind, NodeKind::Var);
        assert_eq!(ast[var].indent, 4);
        assert_eq!(ast[var].parent, Some(class));
    }

    #[test]
    fn test_dedent_ascends_multiple_levels() {
        let source = "\
class A
    func f
        behavior
            step one
class B
    var y
";
        let mut analyzer = Analyzer::new();
        assert!(analyzer.parse_source(source), "diagnostics: {:?}", analyzer.errors());
        let ast = analyzer.ast();
        assert_eq!(ast[ast.root()].children.len(), 2);
        let b = ast[ast.root()].children[1];
        assert_eq!(ast[b].kind, NodeKind::Class);
        assert_eq!(ast[b].children.len(), 1);
    }

    #[test]
    fn test_annotation_rides_on_next_node() {
        let mut analyzer = Analyzer::new();
        assert!(analyzer.parse_source("@ the entry point\nclass Main\n"));
        let ast = analyzer.ast();
        let class = ast[ast.root()].children[0];
        assert_eq!(ast[class].metadata.annotation.as_deref(), Some("the entry point"));
    }

    #[test]
    fn test_duplicate_annotation_is_semantic_and_newest_wins() {
        let mut analyzer = Analyzer::new();
        let ok = analyzer.parse_source("@ first\n@ second\nclass Main\n");
        assert!(!ok);
        assert_eq!(analyzer.errors().len(), 1);
        assert_eq!(analyzer.errors()[0].kind, crate::blueprint::diagnostics::DiagnosticKind::Semantic);
        let ast = analyzer.ast();
        let class = ast[ast.root()].children[0];
        assert_eq!(ast[class].metadata.annotation.as_deref(), Some("second"));
    }

    #[test]
    fn test_analyzer_resets_between_runs() {
        let mut analyzer = Analyzer::new();
        assert!(!analyzer.parse_source("var misplaced\n"));
        assert!(!analyzer.errors().is_empty());

        assert!(analyzer.parse_source("class A\n    var x\n"));
        assert!(analyzer.errors().is_empty());
        assert_eq!(analyzer.ast()[analyzer.ast().root()].children.len(), 1);
        assert_eq!(analyzer.symbols().depth(), 1);
    }

    #[test]
    fn test_parse_file_missing_path_is_single_io_error() {
        let mut analyzer = Analyzer::new();
        let ok = analyzer.parse_file("definitely/not/here.bp");
        assert!(!ok);
        assert_eq!(analyzer.errors().len(), 1);
        assert_eq!(analyzer.errors()[0].kind, crate::blueprint::diagnostics::DiagnosticKind::Io);
        assert!(analyzer.errors()[0].to_string().contains("cannot read"));
        // The tree is the untouched fresh root.
        assert_eq!(analyzer.ast().len(), 1);
    }
}
