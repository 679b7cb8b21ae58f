//! Statement AST nodes.
//!
//! Provides nodes for all statement forms:
//! - Expression statements
//! - Variable declarations
//! - Control flow (if, while, for)
//! - Jump statements (return, break, continue)
//! - Assertions
//! - Blocks

use mica_core::{NodeId, Span};

use crate::expr::Expr;
use crate::types::TypeExpr;

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Expression statement (`expr;`).
    Expr(ExprStmt),
    /// Variable declaration.
    VarDecl(VarDecl),
    /// If statement.
    If(Box<IfStmt>),
    /// While loop.
    While(Box<WhileStmt>),
    /// For loop.
    For(Box<ForStmt>),
    /// Return statement.
    Return(ReturnStmt),
    /// Break statement.
    Break(BreakStmt),
    /// Continue statement.
    Continue(ContinueStmt),
    /// Assert statement.
    Assert(AssertStmt),
    /// Nested block.
    Block(Block),
}

impl Stmt {
    /// The span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expr(s) => s.span,
            Stmt::VarDecl(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(s) => s.span,
            Stmt::Assert(s) => s.span,
            Stmt::Block(s) => s.span,
        }
    }
}

/// A block of statements. Entering a block opens a new scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// An expression used for its effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

/// A local variable declaration, with an optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub id: NodeId,
    pub ty: TypeExpr,
    pub name: crate::decl::Ident,
    pub init: Option<Expr>,
    pub span: Span,
}

/// An if statement with an optional else block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

/// A while loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
    pub span: Span,
}

/// A for loop. Init, condition and update may each be omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub cond: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Block,
    pub span: Span,
}

/// The init clause of a for loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VarDecl(VarDecl),
    Expr(Expr),
}

/// A return statement, with an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// A break statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
}

/// A continue statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub span: Span,
}

/// An assert statement with an optional message expression.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertStmt {
    pub cond: Expr,
    pub message: Option<Expr>,
    pub span: Span,
}
