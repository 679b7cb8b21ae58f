//! Core types shared across the Mica analyzer.
//!
//! This crate provides the substrate that both the AST and the analyzer
//! build on:
//!
//! - [`Span`]: source location tracking
//! - [`NodeId`], [`FuncId`], [`ScopeId`]: typed indices into AST and
//!   analysis-side tables
//! - [`Type`]: the semantic type model (primitives, arrays, structs,
//!   function signatures)
//! - [`AnalysisError`]: the diagnostic type, one variant per failure mode

mod error;
mod ids;
mod span;
mod types;

pub use error::{AnalysisError, DeclSite};
pub use ids::{FuncId, NodeId, NodeIdGen, ScopeId};
pub use span::Span;
pub use types::{Primitive, Type};
