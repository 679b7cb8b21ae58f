//! Abstract syntax tree for Mica.
//!
//! The AST is produced by an external parser and consumed read-only by
//! the semantic analyzer; the analyzer never mutates it. Nodes that the
//! analyzer annotates (declarations, type expressions, and every
//! expression) carry a [`NodeId`] that keys the analyzer's side tables,
//! and every node carries a [`Span`] passed through unmodified into
//! diagnostics.
//!
//! ## Modules
//!
//! - [`decl`]: top-level declarations (structs, functions) and programs
//! - [`stmt`]: statements and blocks
//! - [`expr`]: expressions and operators
//! - [`types`]: syntactic type references (`int`, `Point[]`, ...)

pub mod decl;
pub mod expr;
pub mod stmt;
pub mod types;

pub use decl::{Decl, FieldDecl, FunctionDecl, Ident, Param, Program, StructDecl};
pub use expr::{
    ArrayLit, AssignExpr, BinaryExpr, BinaryOp, CallExpr, Expr, FieldExpr, IdentExpr, IndexExpr,
    LiteralExpr, LiteralKind, StructLit, UnaryExpr, UnaryOp,
};
pub use stmt::{
    AssertStmt, Block, BreakStmt, ContinueStmt, ExprStmt, ForInit, ForStmt, IfStmt, ReturnStmt,
    Stmt, VarDecl, WhileStmt,
};
pub use types::{TypeExpr, TypeExprKind};

// Re-exported so parser-facing code only needs this crate.
pub use mica_core::{NodeId, NodeIdGen, Span};
