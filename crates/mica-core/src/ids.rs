//! Typed indices for AST nodes, functions, and scopes.

use std::fmt;

/// Identifies an AST node.
///
/// The parser assigns each node a unique id; the analyzer keys all of
/// its side tables (resolved types, call targets, variable bindings,
/// expression annotations) by it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Hands out sequential [`NodeId`]s.
///
/// Owned by whatever constructs the AST (the parser, or a test fixture).
#[derive(Debug, Default)]
pub struct NodeIdGen {
    next: u32,
}

impl NodeIdGen {
    /// Create a generator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next unused id.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// Identifies a function (built-in or user-declared) in the global
/// environment's function table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuncId(pub u32);

/// Identifies a scope in the scope arena built by the name-checking pass.
///
/// Scope parent links are stored as `Option<ScopeId>` rather than owning
/// pointers; children never keep parents alive beyond the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);
