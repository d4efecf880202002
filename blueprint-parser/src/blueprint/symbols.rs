//! Scope-stack symbol table
//!
//! Declared names live in a stack of scopes. The root scope is created at
//! initialization and never popped; a new scope is pushed whenever a class or
//! function attaches and popped when the indentation walk leaves its subtree.
//! Registration is conflict-checked against the active scope only: shadowing
//! a name from an outer scope is allowed, redeclaring within the same scope
//! is not.

use std::collections::HashMap;

use crate::blueprint::ast::NodeId;

/// A registered name and the node that declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub node: NodeId,
}

/// One namespace level, named after the class or function that opened it.
#[derive(Debug, Clone)]
pub struct Scope {
    name: String,
    symbols: HashMap<String, Symbol>,
}

impl Scope {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The scope stack. Exactly one scope is active (top of stack) at any time.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// A fresh table holding only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new("root")],
        }
    }

    pub fn push_scope(&mut self, name: impl Into<String>) {
        self.scopes.push(Scope::new(name));
    }

    /// Pop the active scope. The root scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Number of open scopes, root included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn active_scope(&self) -> &Scope {
        self.scopes.last().expect("the root scope is never popped")
    }

    /// Register `name` in the active scope. On a conflict the existing
    /// symbol is returned and the table is left unchanged.
    pub fn register(&mut self, name: &str, node: NodeId) -> Result<(), Symbol> {
        let scope = self.scopes.last_mut().expect("the root scope is never popped");
        if let Some(existing) = scope.symbols.get(name) {
            return Err(existing.clone());
        }
        scope.symbols.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                node,
            },
        );
        Ok(())
    }

    /// Resolve `name` against the stack, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
