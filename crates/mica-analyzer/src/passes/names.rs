//! Pass 4: scope construction and name checking.
//!
//! Builds the scope tree for every function body and resolves each
//! identifier use to the binding it refers to. Two rules are enforced
//! here:
//!
//! - A declaration may not reuse a name already bound in the same
//!   scope (`VariableClash`). Shadowing an outer scope's binding is
//!   legal. Struct fields and parameters count as declarations in their
//!   own scopes.
//! - A variable's initializer is resolved before the variable itself is
//!   bound, so the declared name is not visible inside it. If the
//!   initializer mentions the declared name and no outer binding
//!   exists, that is `SelfInit`; with an outer binding it is an
//!   ordinary reference to the shadowed variable.
//!
//! Identifiers that resolve to nothing are left unbound here; the type
//! checker reports them as `UnknownVariable`, except for function names
//! in assignment-target position, which it reports as
//! `InvalidAssignTarget`.

use log::debug;
use mica_ast::{Block, Decl, Expr, ForInit, FunctionDecl, Program, Stmt, StructDecl, VarDecl};
use mica_core::{AnalysisError, DeclSite, NodeId, ScopeId, Type};
use rustc_hash::FxHashMap;

use crate::scope::{ScopeArena, ScopeKind, Symbol};

use super::Result;

/// What an identifier use resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct VarBinding {
    /// The declaring node: a parameter or variable declaration.
    pub decl: NodeId,
    pub ty: Type,
}

/// The artifacts of name resolution: the scope tree and a map from each
/// resolved identifier use to its binding.
#[derive(Debug)]
pub struct NameResolution {
    pub scopes: ScopeArena,
    pub bindings: FxHashMap<NodeId, VarBinding>,
}

/// Pass 4: build scopes, check declarations, resolve identifier uses.
pub struct NamePass<'a> {
    type_refs: &'a FxHashMap<NodeId, Type>,
    scopes: ScopeArena,
    bindings: FxHashMap<NodeId, VarBinding>,
    /// Name being declared while its initializer is resolved, for the
    /// self-initialization check.
    pending: Option<String>,
}

impl<'a> NamePass<'a> {
    /// Create the pass over the type-reference table from pass 2.
    pub fn new(type_refs: &'a FxHashMap<NodeId, Type>) -> Self {
        Self {
            type_refs,
            scopes: ScopeArena::new(),
            bindings: FxHashMap::default(),
            pending: None,
        }
    }

    pub fn run(mut self, program: &Program) -> Result<NameResolution> {
        for decl in &program.decls {
            match decl {
                Decl::Struct(s) => self.check_struct(s)?,
                Decl::Function(f) => self.check_function(f)?,
            }
        }
        debug!(
            "names: {} scope(s), {} binding(s)",
            self.scopes.len(),
            self.bindings.len()
        );
        Ok(NameResolution {
            scopes: self.scopes,
            bindings: self.bindings,
        })
    }

    /// Field names must be unique within their struct.
    fn check_struct(&mut self, decl: &StructDecl) -> Result<()> {
        let mut seen: FxHashMap<&str, mica_core::Span> = FxHashMap::default();
        for field in &decl.fields {
            if let Some(previous) = seen.get(field.name.name.as_str()) {
                return Err(AnalysisError::VariableClash {
                    name: field.name.name.clone(),
                    span: field.name.span,
                    previous: DeclSite::at(*previous),
                });
            }
            seen.insert(field.name.name.as_str(), field.name.span);
        }
        Ok(())
    }

    fn check_function(&mut self, decl: &FunctionDecl) -> Result<()> {
        // Parameters and the body's top-level locals share one scope.
        let scope = self.scopes.push(ScopeKind::Function, self.scopes.global());
        for param in &decl.params {
            let ty = self.resolved_type(param.ty.id);
            self.declare(
                scope,
                Symbol {
                    name: param.name.name.clone(),
                    ty,
                    decl: param.id,
                    span: param.name.span,
                },
            )?;
        }
        self.walk_stmts(&decl.body, scope)
    }

    fn walk_stmts(&mut self, block: &Block, scope: ScopeId) -> Result<()> {
        for stmt in &block.stmts {
            self.walk_stmt(stmt, scope)?;
        }
        Ok(())
    }

    fn walk_stmt(&mut self, stmt: &Stmt, scope: ScopeId) -> Result<()> {
        match stmt {
            Stmt::Expr(s) => self.resolve_expr(&s.expr, scope),
            Stmt::VarDecl(v) => self.declare_var(v, scope),
            Stmt::If(s) => {
                self.resolve_expr(&s.cond, scope)?;
                let then_scope = self.scopes.push(ScopeKind::Block, scope);
                self.walk_stmts(&s.then_block, then_scope)?;
                if let Some(else_block) = &s.else_block {
                    let else_scope = self.scopes.push(ScopeKind::Block, scope);
                    self.walk_stmts(else_block, else_scope)?;
                }
                Ok(())
            }
            Stmt::While(s) => {
                self.resolve_expr(&s.cond, scope)?;
                let body_scope = self.scopes.push(ScopeKind::Loop, scope);
                self.walk_stmts(&s.body, body_scope)
            }
            Stmt::For(s) => {
                // The loop header's declaration is scoped to the loop.
                let loop_scope = self.scopes.push(ScopeKind::Loop, scope);
                match &s.init {
                    Some(ForInit::VarDecl(v)) => self.declare_var(v, loop_scope)?,
                    Some(ForInit::Expr(e)) => self.resolve_expr(e, loop_scope)?,
                    None => {}
                }
                if let Some(cond) = &s.cond {
                    self.resolve_expr(cond, loop_scope)?;
                }
                if let Some(update) = &s.update {
                    self.resolve_expr(update, loop_scope)?;
                }
                self.walk_stmts(&s.body, loop_scope)
            }
            Stmt::Return(s) => {
                if let Some(value) = &s.value {
                    self.resolve_expr(value, scope)?;
                }
                Ok(())
            }
            Stmt::Break(_) | Stmt::Continue(_) => Ok(()),
            Stmt::Assert(s) => {
                self.resolve_expr(&s.cond, scope)?;
                if let Some(message) = &s.message {
                    self.resolve_expr(message, scope)?;
                }
                Ok(())
            }
            Stmt::Block(b) => {
                let inner = self.scopes.push(ScopeKind::Block, scope);
                self.walk_stmts(b, inner)
            }
        }
    }

    /// Resolve the initializer first, then bind the name.
    fn declare_var(&mut self, decl: &VarDecl, scope: ScopeId) -> Result<()> {
        if let Some(init) = &decl.init {
            let saved = self.pending.replace(decl.name.name.clone());
            let result = self.resolve_expr(init, scope);
            self.pending = saved;
            result?;
        }
        let ty = self.resolved_type(decl.ty.id);
        self.declare(
            scope,
            Symbol {
                name: decl.name.name.clone(),
                ty,
                decl: decl.id,
                span: decl.name.span,
            },
        )
    }

    fn declare(&mut self, scope: ScopeId, symbol: Symbol) -> Result<()> {
        let name = symbol.name.clone();
        let span = symbol.span;
        self.scopes
            .declare(scope, symbol)
            .map_err(|previous| AnalysisError::VariableClash {
                name,
                span,
                previous: DeclSite::at(previous),
            })
    }

    fn resolve_expr(&mut self, expr: &Expr, scope: ScopeId) -> Result<()> {
        match expr {
            Expr::Literal(_) => Ok(()),
            Expr::Ident(e) => {
                match self.scopes.lookup(scope, &e.name.name) {
                    Some(symbol) => {
                        self.bindings.insert(
                            e.id,
                            VarBinding {
                                decl: symbol.decl,
                                ty: symbol.ty.clone(),
                            },
                        );
                    }
                    None => {
                        if self.pending.as_deref() == Some(e.name.name.as_str()) {
                            return Err(AnalysisError::SelfInit {
                                name: e.name.name.clone(),
                                span: e.name.span,
                            });
                        }
                        // Unbound; the type checker decides what it is.
                    }
                }
                Ok(())
            }
            Expr::Binary(e) => {
                self.resolve_expr(&e.lhs, scope)?;
                self.resolve_expr(&e.rhs, scope)
            }
            Expr::Unary(e) => self.resolve_expr(&e.operand, scope),
            Expr::Assign(e) => {
                self.resolve_expr(&e.target, scope)?;
                self.resolve_expr(&e.value, scope)
            }
            Expr::Call(e) => {
                for arg in &e.args {
                    self.resolve_expr(arg, scope)?;
                }
                Ok(())
            }
            Expr::Field(e) => self.resolve_expr(&e.base, scope),
            Expr::Index(e) => {
                self.resolve_expr(&e.base, scope)?;
                self.resolve_expr(&e.index, scope)
            }
            Expr::ArrayLit(e) => {
                for elem in &e.elements {
                    self.resolve_expr(elem, scope)?;
                }
                Ok(())
            }
            Expr::StructLit(e) => {
                for arg in &e.args {
                    self.resolve_expr(arg, scope)?;
                }
                Ok(())
            }
        }
    }

    fn resolved_type(&self, id: NodeId) -> Type {
        self.type_refs
            .get(&id)
            .unwrap_or_else(|| panic!("type reference {id:?} not resolved"))
            .clone()
    }
}
