//! Expression AST nodes.
//!
//! Provides nodes for all expression forms:
//! - Literals (integer, long, double, string, boolean, null)
//! - Identifier references
//! - Binary and unary operations
//! - Assignment
//! - Calls, field access, indexing
//! - Array and struct literals (`new T[]{...}`, `new S(...)`)
//!
//! Every expression node carries a [`NodeId`]; after a successful
//! analysis the type checker's output maps each id to the expression's
//! resolved type.

use mica_core::{NodeId, Span};

use crate::decl::Ident;
use crate::types::TypeExpr;

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value.
    Literal(LiteralExpr),
    /// Identifier reference.
    Ident(IdentExpr),
    /// Binary operation.
    Binary(Box<BinaryExpr>),
    /// Unary prefix operation.
    Unary(Box<UnaryExpr>),
    /// Assignment.
    Assign(Box<AssignExpr>),
    /// Function call.
    Call(CallExpr),
    /// Field access (`base.field`).
    Field(Box<FieldExpr>),
    /// Array indexing (`base[index]`).
    Index(Box<IndexExpr>),
    /// Array literal (`new T[]{ ... }`).
    ArrayLit(ArrayLit),
    /// Struct literal (`new S(...)`).
    StructLit(StructLit),
}

impl Expr {
    /// The id of this expression node.
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Literal(e) => e.id,
            Expr::Ident(e) => e.id,
            Expr::Binary(e) => e.id,
            Expr::Unary(e) => e.id,
            Expr::Assign(e) => e.id,
            Expr::Call(e) => e.id,
            Expr::Field(e) => e.id,
            Expr::Index(e) => e.id,
            Expr::ArrayLit(e) => e.id,
            Expr::StructLit(e) => e.id,
        }
    }

    /// The span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(e) => e.span,
            Expr::Ident(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Assign(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Field(e) => e.span,
            Expr::Index(e) => e.span,
            Expr::ArrayLit(e) => e.span,
            Expr::StructLit(e) => e.span,
        }
    }

    /// Whether this expression can appear as an assignment target.
    ///
    /// Identifiers, field accesses and index expressions denote storage
    /// locations; everything else does not.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expr::Ident(_) | Expr::Field(_) | Expr::Index(_))
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub id: NodeId,
    pub kind: LiteralKind,
    pub span: Span,
}

/// The kind of literal. The parser distinguishes `int` from `long`
/// literals by the `L` suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    Int(i64),
    Long(i64),
    Double(f64),
    Bool(bool),
    Str(String),
    Null,
}

/// An identifier expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentExpr {
    pub id: NodeId,
    pub name: Ident,
    pub span: Span,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl BinaryOp {
    /// The source-level symbol, for diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
        }
    }

    /// Arithmetic operators: numeric operands, numeric result.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem
        )
    }

    /// Logical operators: boolean operands, boolean result.
    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    /// Ordering comparisons: numeric operands, boolean result.
    pub fn is_comparison(self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge)
    }

    /// Equality tests: compatible operands, boolean result.
    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Ne)
    }
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub id: NodeId,
    pub op: BinaryOp,
    pub lhs: Expr,
    pub rhs: Expr,
    pub span: Span,
}

/// A unary prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Numeric negation (`-`).
    Neg,
    /// Numeric identity (`+`).
    Pos,
    /// Logical not (`!`).
    Not,
}

impl UnaryOp {
    /// The source-level symbol, for diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
            UnaryOp::Not => "!",
        }
    }
}

/// A unary prefix operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub id: NodeId,
    pub op: UnaryOp,
    pub operand: Expr,
    pub span: Span,
}

/// An assignment. Yields the target's type as its value.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub id: NodeId,
    pub target: Expr,
    pub value: Expr,
    pub span: Span,
}

/// A function call. Callees are plain names; Mica has no function
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub id: NodeId,
    pub callee: Ident,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A field access.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpr {
    pub id: NodeId,
    pub base: Expr,
    pub field: Ident,
    pub span: Span,
}

/// An index expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub id: NodeId,
    pub base: Expr,
    pub index: Expr,
    pub span: Span,
}

/// An array literal: element type plus element expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLit {
    pub id: NodeId,
    pub elem_ty: TypeExpr,
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// A struct literal: constructed type plus field arguments (either none,
/// or exactly one per field).
#[derive(Debug, Clone, PartialEq)]
pub struct StructLit {
    pub id: NodeId,
    pub ty: TypeExpr,
    pub args: Vec<Expr>,
    pub span: Span,
}
