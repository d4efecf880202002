//! Attachment contracts for blueprint nodes
//!
//! Each parent kind answers "may this child attach after what is already
//! there?" via [`can_attach`], a pure function over the arena. Dispatch is a
//! single exhaustive match over [`NodeKind`], so adding a kind without
//! deciding its contract fails to compile.
//!
//! The ordering rules:
//!
//!   - Root hosts only top-level `module` and `class` declarations.
//!   - A module hosts classes, functions and variables, plus descriptions in
//!     the same positions a class allows them.
//!   - A class takes an optional description first, an optional `inh` before
//!     any member, then any mix of functions and variables; a description may
//!     also directly follow the member it documents.
//!   - A function orders its children: description first, inputs before any
//!     output, outputs before the behavior, at most one behavior, and nothing
//!     at all after the behavior. Several outputs may precede the behavior;
//!     only "behavior already seen" closes the list.
//!   - A behavior block (and the `if`/`else` arms, which nest the same way)
//!     takes statements and `if`s freely, and an `else` only directly after
//!     an `if`.
//!   - Everything else is a leaf.

use super::node::{Ast, NodeId, NodeKind};

/// True if `kind` can host children at all. Used to reject any attempt to
/// indent under a leaf declaration before the specific contract is consulted.
pub fn accepts_children(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Root
            | NodeKind::Module
            | NodeKind::Class
            | NodeKind::Func
            | NodeKind::Behavior
            | NodeKind::If
            | NodeKind::Else
    )
}

/// May a node of kind `child` attach under `parent` right now?
///
/// The decision may depend on the siblings already in place: their kinds, and
/// in particular the kind of the most recently attached one.
pub fn can_attach(ast: &Ast, parent: NodeId, child: NodeKind) -> bool {
    use NodeKind::*;

    let node = &ast[parent];
    let previous = node.children.last().map(|id| ast[*id].kind);

    match node.kind {
        Root => matches!(child, Module | Class),
        Module => match child {
            Description => matches!(previous, None | Some(Class | Func | Var)),
            Class | Func | Var => true,
            _ => false,
        },
        Class => match child {
            Description => matches!(previous, None | Some(Func | Var)),
            Inh => node.children.iter().all(|id| ast[*id].kind == Description),
            Func | Var => true,
            _ => false,
        },
        Func => {
            let seen = |kind: NodeKind| node.children.iter().any(|id| ast[*id].kind == kind);
            match child {
                Description => node.children.is_empty(),
                Input => !seen(Output) && !seen(Behavior),
                Output | Behavior => !seen(Behavior),
                _ => false,
            }
        }
        Behavior | If | Else => match child {
            Statement | If => true,
            Else => previous == Some(If),
            _ => false,
        },
        Inh | Var | Input | Output | Statement | Description => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::ast::node::Node;

    fn tree() -> Ast {
        Ast::new()
    }

    fn add(ast: &mut Ast, parent: NodeId, kind: NodeKind) -> NodeId {
        let indent = ast.child_indent(parent);
        let line = ast.len();
        ast.attach(parent, Node::detached(kind, "", indent, line))
    }

    #[test]
    fn test_root_accepts_only_modules_and_classes() {
        let ast = tree();
        let root = ast.root();
        assert!(can_attach(&ast, root, NodeKind::Module));
        assert!(can_attach(&ast, root, NodeKind::Class));
        assert!(!can_attach(&ast, root, NodeKind::Var));
        assert!(!can_attach(&ast, root, NodeKind::Func));
        assert!(!can_attach(&ast, root, NodeKind::Statement));
    }

    #[test]
    fn test_class_description_positions() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);

        // First child is fine.
        assert!(can_attach(&ast, class, NodeKind::Description));

        add(&mut ast, class, NodeKind::Description);
        // Directly after another description it is not.
        assert!(!can_attach(&ast, class, NodeKind::Description));

        add(&mut ast, class, NodeKind::Var);
        // Directly after the member it documents it is again.
        assert!(can_attach(&ast, class, NodeKind::Description));
    }

    #[test]
    fn test_class_inheritance_must_precede_members() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);

        assert!(can_attach(&ast, class, NodeKind::Inh));

        add(&mut ast, class, NodeKind::Description);
        // Still legal after descriptions only.
        assert!(can_attach(&ast, class, NodeKind::Inh));

        add(&mut ast, class, NodeKind::Func);
        assert!(!can_attach(&ast, class, NodeKind::Inh));
    }

    #[test]
    fn test_func_description_only_first() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);
        let func = add(&mut ast, class, NodeKind::Func);

        assert!(can_attach(&ast, func, NodeKind::Description));
        add(&mut ast, func, NodeKind::Input);
        assert!(!can_attach(&ast, func, NodeKind::Description));
    }

    #[test]
    fn test_func_input_closed_by_output() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);
        let func = add(&mut ast, class, NodeKind::Func);

        add(&mut ast, func, NodeKind::Input);
        add(&mut ast, func, NodeKind::Input);
        assert!(can_attach(&ast, func, NodeKind::Input));

        add(&mut ast, func, NodeKind::Output);
        assert!(!can_attach(&ast, func, NodeKind::Input));
        // Several outputs before the behavior are tolerated.
        assert!(can_attach(&ast, func, NodeKind::Output));
    }

    #[test]
    fn test_func_behavior_closes_everything() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);
        let func = add(&mut ast, class, NodeKind::Func);

        add(&mut ast, func, NodeKind::Behavior);
        assert!(!can_attach(&ast, func, NodeKind::Input));
        assert!(!can_attach(&ast, func, NodeKind::Output));
        assert!(!can_attach(&ast, func, NodeKind::Behavior));
        assert!(!can_attach(&ast, func, NodeKind::Statement));
    }

    #[test]
    fn test_behavior_else_requires_preceding_if() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);
        let func = add(&mut ast, class, NodeKind::Func);
        let behavior = add(&mut ast, func, NodeKind::Behavior);

        assert!(can_attach(&ast, behavior, NodeKind::Statement));
        assert!(!can_attach(&ast, behavior, NodeKind::Else));

        add(&mut ast, behavior, NodeKind::If);
        assert!(can_attach(&ast, behavior, NodeKind::Else));

        add(&mut ast, behavior, NodeKind::Statement);
        assert!(!can_attach(&ast, behavior, NodeKind::Else));
    }

    #[test]
    fn test_if_and_else_nest_like_behavior() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);
        let func = add(&mut ast, class, NodeKind::Func);
        let behavior = add(&mut ast, func, NodeKind::Behavior);
        let branch = add(&mut ast, behavior, NodeKind::If);

        assert!(can_attach(&ast, branch, NodeKind::Statement));
        assert!(can_attach(&ast, branch, NodeKind::If));
        assert!(!can_attach(&ast, branch, NodeKind::Else));

        let arm = add(&mut ast, behavior, NodeKind::Else);
        assert!(can_attach(&ast, arm, NodeKind::Statement));
        assert!(!can_attach(&ast, arm, NodeKind::Else));
    }

    #[test]
    fn test_leaves_reject_all_children() {
        let mut ast = tree();
        let root = ast.root();
        let class = add(&mut ast, root, NodeKind::Class);
        let var = add(&mut ast, class, NodeKind::Var);

        assert!(!accepts_children(NodeKind::Var));
        assert!(!can_attach(&ast, var, NodeKind::Statement));
        assert!(!can_attach(&ast, var, NodeKind::Description));
    }

    #[test]
    fn test_accepts_children_matches_contract() {
        for kind in [
            NodeKind::Inh,
            NodeKind::Input,
            NodeKind::Output,
            NodeKind::Statement,
            NodeKind::Description,
        ] {
            assert!(!accepts_children(kind), "{} should be a leaf", kind);
        }
        for kind in [
            NodeKind::Root,
            NodeKind::Module,
            NodeKind::Class,
            NodeKind::Func,
            NodeKind::Behavior,
            NodeKind::If,
            NodeKind::Else,
        ] {
            assert!(accepts_children(kind), "{} should host children", kind);
        }
    }
}
