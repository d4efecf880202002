//! AST definitions and utilities for the blueprint format
//!
//!     Parsed blueprints form a tree: a fixed root node at indentation level
//!     -1 whose children are the file's top-level module and class
//!     declarations, nesting down through functions, variables and behavior
//!     blocks.
//!
//! Ownership
//!
//!     The tree is arena-backed: [`Ast`](node::Ast) owns every node in a flat
//!     table and all structural links are [`NodeId`](node::NodeId) indexes.
//!     A node's `children` list is the sole ownership path; the `parent`
//!     back-reference is a non-owning index used for upward walks (dedent
//!     handling, scope popping). This keeps the tree acyclic and cheap to
//!     traverse in both directions without reference-counted cycles.
//!
//! Nesting
//!
//!     What may nest where is decided by the attachment contract in
//!     [`grammar`]: one exhaustive match over the parent's kind answering
//!     "may this child attach after that sibling?". Leaf kinds (`var`,
//!     `input`, `output`, `statement`, `desc`, `inh`) never accept children;
//!     their placement is enforced entirely by their parents.
//!
//! Serialization
//!
//!     [`snapshot`] provides a normalized, serde-serializable representation
//!     of the tree consumed by every output format (JSON, YAML, tree text)
//!     so serializers never reimplement traversal.

pub mod grammar;
pub mod node;
pub mod snapshot;

pub use node::{Ast, Metadata, Node, NodeId, NodeKind, INDENT_UNIT};
pub use snapshot::{snapshot_from_ast, snapshot_with_options, AstSnapshot};
