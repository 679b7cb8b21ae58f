//! Top-level declarations.
//!
//! A Mica program is a sequence of struct and function declarations.
//! There are no global variables; all variables are parameters, fields,
//! or locals.

use mica_core::{NodeId, Span};

use crate::stmt::Block;
use crate::types::TypeExpr;

/// A parsed program: the root of the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub decls: Vec<Decl>,
    pub span: Span,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Struct(StructDecl),
    Function(FunctionDecl),
}

impl Decl {
    /// The span of this declaration.
    pub fn span(&self) -> Span {
        match self {
            Decl::Struct(d) => d.span,
            Decl::Function(d) => d.span,
        }
    }
}

/// A name as written in source.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// A struct declaration with its ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub id: NodeId,
    pub name: Ident,
    pub fields: Vec<FieldDecl>,
    pub span: Span,
}

/// A single field of a struct.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub id: NodeId,
    pub ty: TypeExpr,
    pub name: Ident,
    pub span: Span,
}

/// A function declaration with its signature and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub id: NodeId,
    pub ret: TypeExpr,
    pub name: Ident,
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub id: NodeId,
    pub ty: TypeExpr,
    pub name: Ident,
    pub span: Span,
}
