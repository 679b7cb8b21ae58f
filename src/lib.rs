//! Mica: a semantic analyzer for a small statically typed teaching
//! language.
//!
//! This crate re-exports the workspace members behind one face:
//!
//! - [`core`]: spans, node ids, the type model, and diagnostics
//! - [`ast`]: the immutable syntax tree the parser produces
//! - [`analyzer`]: the six-pass analysis pipeline
//!
//! Most users only need [`analyze`] (the full pipeline) or
//! [`build_symbols`] (declaration binding and name resolution without
//! type checking).

pub use mica_analyzer as analyzer;
pub use mica_ast as ast;
pub use mica_core as core;

pub use mica_analyzer::{Analysis, SymbolTable, analyze, build_symbols};
pub use mica_core::{AnalysisError, NodeId, Span, Type};
