//! AST Snapshot - a normalized intermediate representation of the tree
//!
//! This module provides a canonical, format-agnostic representation of a
//! parsed blueprint suitable for serialization to any output format (JSON,
//! YAML, tree text). The snapshot captures node types, labels, attributes and
//! children; each serializer consumes it instead of reimplementing traversal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::node::{Ast, NodeId};

/// A snapshot of an AST node in a normalized, serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g. "Class", "Func", "Behavior").
    pub node_type: String,

    /// The declared name where one exists, otherwise the raw content.
    pub label: String,

    /// Additional attributes: line, indent and, on request, metadata.
    pub attributes: HashMap<String, String>,

    /// Child nodes in attachment order.
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

/// Snapshot the whole tree with the default options (no metadata attributes).
pub fn snapshot_from_ast(ast: &Ast) -> AstSnapshot {
    snapshot_with_options(ast, false)
}

/// Snapshot the whole tree. With `include_metadata` set, annotation and
/// description texts ride along as attributes.
pub fn snapshot_with_options(ast: &Ast, include_metadata: bool) -> AstSnapshot {
    snapshot_node(ast, ast.root(), include_metadata)
}

fn snapshot_node(ast: &Ast, id: NodeId, include_metadata: bool) -> AstSnapshot {
    let node = &ast[id];
    let label = node.name.clone().unwrap_or_else(|| node.content.clone());

    let mut snapshot = AstSnapshot::new(node.kind.name().to_string(), label)
        .with_attribute("line", node.line.to_string())
        .with_attribute("indent", node.indent.to_string());

    if include_metadata {
        if let Some(annotation) = &node.metadata.annotation {
            snapshot = snapshot.with_attribute("annotation", annotation.clone());
        }
        if let Some(description) = &node.metadata.description {
            snapshot = snapshot.with_attribute("description", description.clone());
        }
    }

    for child in &node.children {
        snapshot
            .children
            .push(snapshot_node(ast, *child, include_metadata));
    }

    snapshot
}
