//! Syntactic type references.
//!
//! A [`TypeExpr`] is the purely textual form of a type as it appears in
//! a declaration (`int`, `Point`, `double[][]`). The analyzer's type
//! resolution pass maps each one to a semantic `Type`, keyed by its id.

use mica_core::{NodeId, Span};

/// A type as written in source.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub id: NodeId,
    pub kind: TypeExprKind,
    pub span: Span,
}

/// The shape of a type reference.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExprKind {
    /// A named type: a primitive name or a declared struct name.
    Named(String),
    /// An array of some element type.
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    /// The innermost named type of this reference (`double` for
    /// `double[][]`).
    pub fn base_name(&self) -> &str {
        match &self.kind {
            TypeExprKind::Named(name) => name,
            TypeExprKind::Array(elem) => elem.base_name(),
        }
    }
}
