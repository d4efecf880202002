//! Node construction from classified lines
//!
//! The factory turns one structural [`ProcessedLine`] plus the pending
//! annotation (if any) into a detached [`Node`], or reports the line as
//! unrecognized. It is deterministic and has no knowledge of tree position:
//! whether the produced node may actually attach is decided later by the
//! grammar contract.
//!
//! Declaration Grammar
//!
//!     module NAME          class NAME           inh BASE
//!     func NAME            var NAME ...         input NAME ...
//!     output NAME ...      behavior             if TEXT
//!     else                 desc TEXT
//!
//! Any line whose first token is not one of the keywords above is a
//! free-form statement. A keyword line is unrecognized when its required
//! NAME is missing or not an identifier, when `behavior`/`else` carry
//! trailing tokens, or when `if`/`desc` have no text.

use logos::Logos;

use crate::blueprint::ast::{Node, NodeKind};
use crate::blueprint::lexing::ProcessedLine;

/// Tokens of a structural declaration line.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
enum DeclToken {
    #[token("module")]
    Module,
    #[token("class")]
    Class,
    #[token("inh")]
    Inh,
    #[token("func")]
    Func,
    #[token("var")]
    Var,
    #[token("input")]
    Input,
    #[token("output")]
    Output,
    #[token("behavior")]
    Behavior,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("desc")]
    Desc,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string(), priority = 3)]
    Ident(String),
}

/// Build a detached node from a classified structural line.
///
/// Returns `None` for unrecognized lines; the analyzer reports those as
/// structural errors. The pending annotation is recorded in the node's
/// metadata and consumed by the caller only when the attach succeeds.
pub fn build_node(line: &ProcessedLine, annotation: Option<&str>) -> Option<Node> {
    let mut lexer = DeclToken::lexer(&line.content);

    let node = match lexer.next() {
        Some(Ok(DeclToken::Module)) => named(NodeKind::Module, line, &mut lexer)?,
        Some(Ok(DeclToken::Class)) => named(NodeKind::Class, line, &mut lexer)?,
        Some(Ok(DeclToken::Inh)) => named(NodeKind::Inh, line, &mut lexer)?,
        Some(Ok(DeclToken::Func)) => named(NodeKind::Func, line, &mut lexer)?,
        Some(Ok(DeclToken::Var)) => named(NodeKind::Var, line, &mut lexer)?,
        Some(Ok(DeclToken::Input)) => named(NodeKind::Input, line, &mut lexer)?,
        Some(Ok(DeclToken::Output)) => named(NodeKind::Output, line, &mut lexer)?,
        Some(Ok(DeclToken::Behavior)) => bare(NodeKind::Behavior, line, &mut lexer)?,
        Some(Ok(DeclToken::Else)) => bare(NodeKind::Else, line, &mut lexer)?,
        Some(Ok(DeclToken::If)) => {
            let condition = lexer.remainder().trim();
            if condition.is_empty() {
                return None;
            }
            detached(NodeKind::If, line)
        }
        Some(Ok(DeclToken::Desc)) => {
            let text = lexer.remainder().trim();
            if text.is_empty() {
                return None;
            }
            // The description's content is its payload, not the raw line.
            Node::detached(NodeKind::Description, text, line.indent as i32, line.line_number)
        }
        // Anything else opens a free-form statement line.
        Some(_) => detached(NodeKind::Statement, line),
        None => return None,
    };

    match annotation {
        Some(text) => Some(node.with_annotation(text)),
        None => Some(node),
    }
}

fn detached(kind: NodeKind, line: &ProcessedLine) -> Node {
    Node::detached(kind, line.content.clone(), line.indent as i32, line.line_number)
}

/// A keyword declaration followed by a mandatory identifier.
fn named(
    kind: NodeKind,
    line: &ProcessedLine,
    lexer: &mut logos::Lexer<'_, DeclToken>,
) -> Option<Node> {
    match lexer.next() {
        Some(Ok(DeclToken::Ident(name))) => Some(detached(kind, line).with_name(name)),
        _ => None,
    }
}

/// A bare keyword declaration; trailing tokens make it unrecognized.
fn bare(
    kind: NodeKind,
    line: &ProcessedLine,
    lexer: &mut logos::Lexer<'_, DeclToken>,
) -> Option<Node> {
    match lexer.next() {
        None => Some(detached(kind, line)),
        Some(_) => None,
    }
}
