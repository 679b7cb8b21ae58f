//! Pass 5: control-flow placement.
//!
//! `break` and `continue` are only legal inside a loop body. The pass
//! walks each function body with a loop-depth counter; crossing into a
//! `while` or `for` body increments it, and a jump statement at depth
//! zero halts the pass. A nested function boundary cannot occur, so the
//! counter resets per function trivially.

use log::debug;
use mica_ast::{Block, Decl, Program, Stmt};
use mica_core::AnalysisError;

use super::Result;

/// Pass 5: validate break/continue placement.
pub struct ControlPass {
    depth: u32,
}

impl ControlPass {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn run(mut self, program: &Program) -> Result<()> {
        for decl in &program.decls {
            if let Decl::Function(f) = decl {
                self.walk_block(&f.body)?;
            }
        }
        debug!("control: break/continue placement ok");
        Ok(())
    }

    fn walk_block(&mut self, block: &Block) -> Result<()> {
        for stmt in &block.stmts {
            self.walk_stmt(stmt)?;
        }
        Ok(())
    }

    fn walk_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Break(s) => {
                if self.depth == 0 {
                    return Err(AnalysisError::BreakNotInLoop { span: s.span });
                }
                Ok(())
            }
            Stmt::Continue(s) => {
                if self.depth == 0 {
                    return Err(AnalysisError::ContinueNotInLoop { span: s.span });
                }
                Ok(())
            }
            Stmt::While(s) => {
                self.depth += 1;
                let result = self.walk_block(&s.body);
                self.depth -= 1;
                result
            }
            Stmt::For(s) => {
                self.depth += 1;
                let result = self.walk_block(&s.body);
                self.depth -= 1;
                result
            }
            Stmt::If(s) => {
                self.walk_block(&s.then_block)?;
                if let Some(else_block) = &s.else_block {
                    self.walk_block(else_block)?;
                }
                Ok(())
            }
            Stmt::Block(b) => self.walk_block(b),
            Stmt::Expr(_) | Stmt::VarDecl(_) | Stmt::Return(_) | Stmt::Assert(_) => Ok(()),
        }
    }
}

impl Default for ControlPass {
    fn default() -> Self {
        Self::new()
    }
}
