//! Diagnostics reported by the analyzer.
//!
//! [`AnalysisError`] has one variant per failure mode the analyzer can
//! diagnose. Each pass returns the first diagnostic it encounters in a
//! deterministic traversal (declaration order, then depth-first), and
//! the pipeline stops at the first failing pass, so a whole analysis
//! run surfaces at most one of these.
//!
//! Internal inconsistencies (a node id missing from a table an earlier
//! pass must have filled, for instance) are implementation defects, not
//! diagnosable user errors; the analyzer panics on those instead of
//! producing an `AnalysisError`.

use std::fmt;

use thiserror::Error;

use crate::Span;

/// Where a name was first declared: at a source location, or nowhere
/// because it is a built-in.
///
/// Used by the clash diagnostics, whose messages name both declaration
/// sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclSite(pub Option<Span>);

impl DeclSite {
    /// A built-in declaration with no source location.
    pub const BUILTIN: DeclSite = DeclSite(None);

    /// A declaration at the given source location.
    pub fn at(span: Span) -> DeclSite {
        DeclSite(Some(span))
    }
}

impl fmt::Display for DeclSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(span) => write!(f, "previously declared at {span}"),
            None => f.write_str("a built-in name"),
        }
    }
}

/// A diagnostic produced by semantic analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A type declaration reuses a live type name.
    #[error("at {span}: redefinition of type '{name}', {previous}")]
    TypeClash {
        name: String,
        span: Span,
        previous: DeclSite,
    },

    /// A function declaration reuses a live function name.
    #[error("at {span}: redefinition of function '{name}', {previous}")]
    FunctionClash {
        name: String,
        span: Span,
        previous: DeclSite,
    },

    /// A type reference names a type that was never declared.
    #[error("at {span}: unknown type '{name}'")]
    UnknownType { name: String, span: Span },

    /// A call names a function that was never declared.
    #[error("at {span}: unknown function '{name}'")]
    UnknownFunction { name: String, span: Span },

    /// A variable declaration reuses a name bound in the same scope.
    #[error("at {span}: redeclaration of '{name}', {previous}")]
    VariableClash {
        name: String,
        span: Span,
        previous: DeclSite,
    },

    /// A variable's initializer refers to the variable being declared,
    /// with no outer binding of that name to fall back on.
    #[error("at {span}: '{name}' used in its own initializer")]
    SelfInit { name: String, span: Span },

    /// A break statement outside any enclosing loop.
    #[error("at {span}: break outside of a loop")]
    BreakNotInLoop { span: Span },

    /// A continue statement outside any enclosing loop.
    #[error("at {span}: continue outside of a loop")]
    ContinueNotInLoop { span: Span },

    /// An identifier with no binding anywhere in the scope chain.
    #[error("at {span}: unknown variable '{name}'")]
    UnknownVariable { name: String, span: Span },

    /// An expression's type is incompatible with its context.
    #[error("at {span}: mismatched types: expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: String,
        span: Span,
    },

    /// A call or constructor supplies the wrong number of arguments.
    #[error("at {span}: '{name}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    /// A field access names a field the base type does not have.
    #[error("at {span}: type '{base}' has no field '{field}'")]
    UnknownField {
        base: String,
        field: String,
        span: Span,
    },

    /// The target of an assignment is not assignable.
    #[error("at {span}: invalid assignment target")]
    InvalidAssignTarget { span: Span },

    /// A non-void function does not return on every path.
    #[error("at {span}: function '{name}' does not return a value on all paths")]
    MissingReturn { name: String, span: Span },
}

impl AnalysisError {
    /// The source location this diagnostic points at.
    pub fn span(&self) -> Span {
        match self {
            AnalysisError::TypeClash { span, .. }
            | AnalysisError::FunctionClash { span, .. }
            | AnalysisError::UnknownType { span, .. }
            | AnalysisError::UnknownFunction { span, .. }
            | AnalysisError::VariableClash { span, .. }
            | AnalysisError::SelfInit { span, .. }
            | AnalysisError::BreakNotInLoop { span }
            | AnalysisError::ContinueNotInLoop { span }
            | AnalysisError::UnknownVariable { span, .. }
            | AnalysisError::TypeMismatch { span, .. }
            | AnalysisError::ArityMismatch { span, .. }
            | AnalysisError::UnknownField { span, .. }
            | AnalysisError::InvalidAssignTarget { span }
            | AnalysisError::MissingReturn { span, .. } => *span,
        }
    }
}
