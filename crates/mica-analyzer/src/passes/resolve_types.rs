//! Pass 2: type resolution.
//!
//! Resolves every syntactic type reference in the program against the
//! type namespace built by pass 1: struct field types, function return
//! and parameter types, variable declaration types, and the constructed
//! types of array and struct literals. Array element
//! types resolve recursively, depth-first. A reference naming an
//! undeclared type halts the pass with `UnknownType`; there is no
//! fallback type.
//!
//! On success the pass has filled in struct field tables and function
//! signatures in the environment, and returns a map from each type
//! expression's node id to its resolved `Type`.

use log::debug;
use mica_ast::{Block, Decl, Expr, ForInit, FunctionDecl, Program, Stmt, StructDecl, TypeExpr,
    TypeExprKind};
use mica_core::{AnalysisError, NodeId, Type};
use rustc_hash::FxHashMap;

use crate::env::GlobalEnv;

use super::Result;

/// Pass 2: resolve type names to the types they denote.
pub struct TypeResolvePass<'a> {
    env: &'a mut GlobalEnv,
    resolved: FxHashMap<NodeId, Type>,
}

impl<'a> TypeResolvePass<'a> {
    /// Create a resolver over the environment populated by pass 1.
    pub fn new(env: &'a mut GlobalEnv) -> Self {
        Self {
            env,
            resolved: FxHashMap::default(),
        }
    }

    /// Run the pass, returning the type-reference table.
    pub fn run(mut self, program: &Program) -> Result<FxHashMap<NodeId, Type>> {
        for decl in &program.decls {
            match decl {
                Decl::Struct(s) => self.resolve_struct(s)?,
                Decl::Function(f) => self.resolve_function(f)?,
            }
        }
        debug!("resolve_types: resolved {} type reference(s)", self.resolved.len());
        Ok(self.resolved)
    }

    fn resolve_struct(&mut self, decl: &StructDecl) -> Result<()> {
        let mut fields = Vec::with_capacity(decl.fields.len());
        for field in &decl.fields {
            let ty = self.resolve(&field.ty)?;
            fields.push((field.name.name.clone(), ty));
        }
        self.env
            .struct_def_mut(&decl.name.name)
            .unwrap_or_else(|| panic!("struct '{}' not bound by pass 1", decl.name.name))
            .fields = fields;
        Ok(())
    }

    fn resolve_function(&mut self, decl: &FunctionDecl) -> Result<()> {
        let ret = self.resolve(&decl.ret)?;
        let mut params = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            params.push(self.resolve(&param.ty)?);
        }

        let id = self
            .env
            .lookup_function(&decl.name.name)
            .unwrap_or_else(|| panic!("function '{}' not bound by pass 1", decl.name.name));
        let def = self.env.func_mut(id);
        def.params = params;
        def.ret = ret;

        self.walk_block(&decl.body)
    }

    /// Resolve one type expression, recording the result for it and for
    /// every nested element type.
    fn resolve(&mut self, ty: &TypeExpr) -> Result<Type> {
        let resolved = match &ty.kind {
            TypeExprKind::Named(name) => {
                self.env
                    .lookup_type(name)
                    .ok_or_else(|| AnalysisError::UnknownType {
                        name: name.clone(),
                        span: ty.span,
                    })?
            }
            TypeExprKind::Array(elem) => self.resolve(elem)?.array_of(),
        };
        self.resolved.insert(ty.id, resolved.clone());
        Ok(resolved)
    }

    fn walk_block(&mut self, block: &Block) -> Result<()> {
        for stmt in &block.stmts {
            self.walk_stmt(stmt)?;
        }
        Ok(())
    }

    fn walk_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Expr(s) => self.walk_expr(&s.expr),
            Stmt::VarDecl(v) => {
                self.resolve(&v.ty)?;
                if let Some(init) = &v.init {
                    self.walk_expr(init)?;
                }
                Ok(())
            }
            Stmt::If(s) => {
                self.walk_expr(&s.cond)?;
                self.walk_block(&s.then_block)?;
                if let Some(else_block) = &s.else_block {
                    self.walk_block(else_block)?;
                }
                Ok(())
            }
            Stmt::While(s) => {
                self.walk_expr(&s.cond)?;
                self.walk_block(&s.body)
            }
            Stmt::For(s) => {
                match &s.init {
                    Some(ForInit::VarDecl(v)) => {
                        self.resolve(&v.ty)?;
                        if let Some(init) = &v.init {
                            self.walk_expr(init)?;
                        }
                    }
                    Some(ForInit::Expr(e)) => self.walk_expr(e)?,
                    None => {}
                }
                if let Some(cond) = &s.cond {
                    self.walk_expr(cond)?;
                }
                if let Some(update) = &s.update {
                    self.walk_expr(update)?;
                }
                self.walk_block(&s.body)
            }
            Stmt::Return(s) => {
                if let Some(value) = &s.value {
                    self.walk_expr(value)?;
                }
                Ok(())
            }
            Stmt::Break(_) | Stmt::Continue(_) => Ok(()),
            Stmt::Assert(s) => {
                self.walk_expr(&s.cond)?;
                if let Some(message) = &s.message {
                    self.walk_expr(message)?;
                }
                Ok(())
            }
            Stmt::Block(b) => self.walk_block(b),
        }
    }

    /// Type references can nest arbitrarily deep inside expressions via
    /// array and struct literals.
    fn walk_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Literal(_) | Expr::Ident(_) => Ok(()),
            Expr::Binary(e) => {
                self.walk_expr(&e.lhs)?;
                self.walk_expr(&e.rhs)
            }
            Expr::Unary(e) => self.walk_expr(&e.operand),
            Expr::Assign(e) => {
                self.walk_expr(&e.target)?;
                self.walk_expr(&e.value)
            }
            Expr::Call(e) => {
                for arg in &e.args {
                    self.walk_expr(arg)?;
                }
                Ok(())
            }
            Expr::Field(e) => self.walk_expr(&e.base),
            Expr::Index(e) => {
                self.walk_expr(&e.base)?;
                self.walk_expr(&e.index)
            }
            Expr::ArrayLit(e) => {
                self.resolve(&e.elem_ty)?;
                for elem in &e.elements {
                    self.walk_expr(elem)?;
                }
                Ok(())
            }
            Expr::StructLit(e) => {
                self.resolve(&e.ty)?;
                for arg in &e.args {
                    self.walk_expr(arg)?;
                }
                Ok(())
            }
        }
    }
}
