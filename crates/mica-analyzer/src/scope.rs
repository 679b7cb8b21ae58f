//! Scope tree for local name resolution.
//!
//! Scopes live in a [`ScopeArena`] owned by the analysis run; a scope
//! refers to its parent by [`ScopeId`], never by an owning pointer, so
//! the tree can be dropped wholesale when the run ends. The name
//! checking pass pushes a scope on entering a function body, block, or
//! loop, and the arena persists so the type checking pass can consult
//! the same tree.

use mica_core::{NodeId, ScopeId, Span, Type};
use rustc_hash::FxHashMap;

/// What kind of construct opened a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function,
    Block,
    Loop,
}

/// A variable binding: parameter or local.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    /// The declaring AST node (parameter or variable declaration).
    pub decl: NodeId,
    pub span: Span,
}

#[derive(Debug)]
struct ScopeData {
    parent: Option<ScopeId>,
    kind: ScopeKind,
    symbols: FxHashMap<String, Symbol>,
}

/// Arena of all scopes created during one analysis run.
///
/// The arena always contains a root global scope; function scopes hang
/// off it, block and loop scopes off their enclosing scope.
#[derive(Debug)]
pub struct ScopeArena {
    scopes: Vec<ScopeData>,
}

impl ScopeArena {
    /// Create an arena holding just the global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![ScopeData {
                parent: None,
                kind: ScopeKind::Global,
                symbols: FxHashMap::default(),
            }],
        }
    }

    /// The root global scope.
    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Open a new scope under the given parent.
    pub fn push(&mut self, kind: ScopeKind, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(ScopeData {
            parent: Some(parent),
            kind,
            symbols: FxHashMap::default(),
        });
        id
    }

    /// Insert a symbol into a scope.
    ///
    /// Fails with the previous declaration's span if the name is already
    /// bound in this same scope. Outer scopes are not consulted:
    /// shadowing an outer binding is legal.
    pub fn declare(&mut self, scope: ScopeId, symbol: Symbol) -> Result<(), Span> {
        let data = &mut self.scopes[scope.0 as usize];
        if let Some(existing) = data.symbols.get(&symbol.name) {
            return Err(existing.span);
        }
        data.symbols.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Look a name up in one scope only.
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.scopes[scope.0 as usize].symbols.get(name)
    }

    /// Look a name up along the scope chain, innermost first.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let data = &self.scopes[id.0 as usize];
            if let Some(symbol) = data.symbols.get(name) {
                return Some(symbol);
            }
            current = data.parent;
        }
        None
    }

    /// The kind of a scope.
    pub fn kind(&self, scope: ScopeId) -> ScopeKind {
        self.scopes[scope.0 as usize].kind
    }

    /// The parent of a scope, if any.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0 as usize].parent
    }

    /// Number of scopes in the arena, the global scope included.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the global scope always exists
    }
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}
