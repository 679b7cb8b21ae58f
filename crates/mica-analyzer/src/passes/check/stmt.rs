//! Statement checking and the all-paths-return analysis.

use mica_ast::{Block, ForInit, FunctionDecl, Stmt, VarDecl};
use mica_core::{AnalysisError, Type};

use crate::passes::Result;

use super::CheckPass;

impl CheckPass<'_> {
    pub(super) fn check_function(&mut self, decl: &FunctionDecl) -> Result<()> {
        let id = self
            .env
            .lookup_function(&decl.name.name)
            .unwrap_or_else(|| panic!("function '{}' not bound", decl.name.name));
        self.ret = self.env.func(id).ret.clone();

        self.check_block(&decl.body)?;

        if !self.ret.is_void() && !guarantees_return(&decl.body) {
            return Err(AnalysisError::MissingReturn {
                name: decl.name.name.clone(),
                span: decl.name.span,
            });
        }
        Ok(())
    }

    fn check_block(&mut self, block: &Block) -> Result<()> {
        for stmt in &block.stmts {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Expr(s) => self.infer(&s.expr).map(drop),
            Stmt::VarDecl(v) => self.check_var_decl(v),
            Stmt::If(s) => {
                self.expect(&s.cond, &Type::BOOLEAN)?;
                self.check_block(&s.then_block)?;
                if let Some(else_block) = &s.else_block {
                    self.check_block(else_block)?;
                }
                Ok(())
            }
            Stmt::While(s) => {
                self.expect(&s.cond, &Type::BOOLEAN)?;
                self.check_block(&s.body)
            }
            Stmt::For(s) => {
                match &s.init {
                    Some(ForInit::VarDecl(v)) => self.check_var_decl(v)?,
                    Some(ForInit::Expr(e)) => {
                        self.infer(e)?;
                    }
                    None => {}
                }
                if let Some(cond) = &s.cond {
                    self.expect(cond, &Type::BOOLEAN)?;
                }
                if let Some(update) = &s.update {
                    self.infer(update)?;
                }
                self.check_block(&s.body)
            }
            Stmt::Return(s) => match &s.value {
                Some(value) => {
                    if self.ret.is_void() {
                        let found = self.infer(value)?;
                        return Err(AnalysisError::TypeMismatch {
                            expected: Type::VOID.to_string(),
                            found: found.to_string(),
                            span: value.span(),
                        });
                    }
                    let expected = self.ret.clone();
                    self.expect(value, &expected)
                }
                None => {
                    if !self.ret.is_void() {
                        return Err(AnalysisError::TypeMismatch {
                            expected: self.ret.to_string(),
                            found: Type::VOID.to_string(),
                            span: s.span,
                        });
                    }
                    Ok(())
                }
            },
            Stmt::Break(_) | Stmt::Continue(_) => Ok(()),
            Stmt::Assert(s) => {
                self.expect(&s.cond, &Type::BOOLEAN)?;
                if let Some(message) = &s.message {
                    self.expect(message, &Type::STRING)?;
                }
                Ok(())
            }
            Stmt::Block(b) => self.check_block(b),
        }
    }

    fn check_var_decl(&mut self, decl: &VarDecl) -> Result<()> {
        let ty = self.resolved_type(decl.ty.id);
        if ty.is_void() {
            return Err(AnalysisError::TypeMismatch {
                expected: "a non-void type".into(),
                found: ty.to_string(),
                span: decl.ty.span,
            });
        }
        if let Some(init) = &decl.init {
            self.expect(init, &ty)?;
        }
        Ok(())
    }
}

/// Whether every path through the block reaches a return.
///
/// Loops are not assumed to execute, so only a return statement or an
/// `if` whose both arms guarantee a return counts.
fn guarantees_return(block: &Block) -> bool {
    block.stmts.iter().any(stmt_guarantees_return)
}

fn stmt_guarantees_return(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Return(_) => true,
        Stmt::If(s) => match &s.else_block {
            Some(else_block) => {
                guarantees_return(&s.then_block) && guarantees_return(else_block)
            }
            None => false,
        },
        Stmt::Block(b) => guarantees_return(b),
        _ => false,
    }
}
