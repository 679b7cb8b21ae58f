//! Pass 3: call resolution.
//!
//! Walks every function body and resolves every call's callee name
//! against the function namespace, built-ins included. Calls resolve by
//! name only; signature checks belong to the type checker. The walk is
//! pre-order, so a call's own resolution is checked before the calls
//! inside its arguments. An undeclared callee halts the pass with
//! `UnknownFunction`.

use log::debug;
use mica_ast::{Block, Decl, Expr, ForInit, Program, Stmt};
use mica_core::{AnalysisError, FuncId, NodeId};
use rustc_hash::FxHashMap;

use crate::env::GlobalEnv;

use super::Result;

/// Pass 3: map every call expression to the function it invokes.
pub struct CallResolvePass<'a> {
    env: &'a GlobalEnv,
    targets: FxHashMap<NodeId, FuncId>,
}

impl<'a> CallResolvePass<'a> {
    pub fn new(env: &'a GlobalEnv) -> Self {
        Self {
            env,
            targets: FxHashMap::default(),
        }
    }

    /// Run the pass, returning the call-target table.
    pub fn run(mut self, program: &Program) -> Result<FxHashMap<NodeId, FuncId>> {
        for decl in &program.decls {
            if let Decl::Function(f) = decl {
                self.walk_block(&f.body)?;
            }
        }
        debug!("resolve_calls: resolved {} call(s)", self.targets.len());
        Ok(self.targets)
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
                let id = self.env.lookup_function(&e.callee.name).ok_or_else(|| {
                    AnalysisError::UnknownFunction {
                        name: e.callee.name.clone(),
                        span: e.callee.span,
                    }
                })?;
                self.targets.insert(e.id, id);
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
                for elem in &e.elements {
                    self.walk_expr(elem)?;
                }
                Ok(())
            }
            Expr::StructLit(e) => {
                for arg in &e.args {
                    self.walk_expr(arg)?;
                }
                Ok(())
            }
        }
    }
}
