//! Arena-backed node storage for blueprint ASTs

use std::fmt;
use std::ops::{Index, IndexMut};

/// Columns per nesting level. A hard constant of the grammar, not a
/// configuration knob.
pub const INDENT_UNIT: i32 = 4;

/// The closed set of node kinds in a blueprint tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Module,
    Class,
    Inh,
    Func,
    Var,
    Input,
    Output,
    Behavior,
    Statement,
    If,
    Else,
    Description,
}

impl NodeKind {
    /// CamelCase name used by serialized snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Module => "Module",
            NodeKind::Class => "Class",
            NodeKind::Inh => "Inh",
            NodeKind::Func => "Func",
            NodeKind::Var => "Var",
            NodeKind::Input => "Input",
            NodeKind::Output => "Output",
            NodeKind::Behavior => "Behavior",
            NodeKind::Statement => "Statement",
            NodeKind::If => "If",
            NodeKind::Else => "Else",
            NodeKind::Description => "Description",
        }
    }

    /// True for kinds that introduce a name into the enclosing scope.
    pub fn declares_symbol(&self) -> bool {
        matches!(self, NodeKind::Class | NodeKind::Func | NodeKind::Var)
    }

    /// True for kinds that open a new scope for their subtree.
    pub fn defines_scope(&self) -> bool {
        matches!(self, NodeKind::Class | NodeKind::Func)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            NodeKind::Root => "root",
            NodeKind::Module => "module",
            NodeKind::Class => "class",
            NodeKind::Inh => "inh",
            NodeKind::Func => "func",
            NodeKind::Var => "var",
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::Behavior => "behavior",
            NodeKind::Statement => "statement",
            NodeKind::If => "if",
            NodeKind::Else => "else",
            NodeKind::Description => "desc",
        };
        write!(f, "{}", keyword)
    }
}

/// Free-text notes riding on a node: the `@` annotation that preceded its
/// declaration and the description attached to it by a `desc` line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub annotation: Option<String>,
    pub description: Option<String>,
}

/// Index of a node inside its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node. Created detached by the factory, then wired into the tree
/// by [`Ast::attach`]; its child list and parent link are never rewritten
/// after that point.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Raw declaration text (for `desc`, the description payload).
    pub content: String,
    /// Column of the declaration; -1 is reserved for the root.
    pub indent: i32,
    /// 1-based source line; 0 for the synthetic root.
    pub line: usize,
    /// Declared name, present only for symbol-declaring kinds.
    pub name: Option<String>,
    pub metadata: Metadata,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    /// Create a detached node with no name, metadata, children or parent.
    pub fn detached(kind: NodeKind, content: impl Into<String>, indent: i32, line: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            indent,
            line,
            name: None,
            metadata: Metadata::default(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.metadata.annotation = Some(annotation.into());
        self
    }
}

/// Flat-table tree storage. Slot 0 always holds the root.
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    /// A fresh tree containing only the root node at indent -1.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeKind::Root, "", -1, 0)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root is always present.
        false
    }

    /// Wire a detached node under `parent` and return its id.
    pub fn attach(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The column at which children of `id` must sit: the node's own column
    /// plus one indentation unit, except the root, whose children are fixed
    /// at column 0.
    pub fn child_indent(&self, id: NodeId) -> i32 {
        let indent = self[id].indent;
        if indent < 0 {
            0
        } else {
            indent + INDENT_UNIT
        }
    }

    /// Iterate every node with its id, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Ast {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
