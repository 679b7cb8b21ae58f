//! Semantic analysis for Mica.
//!
//! The analyzer consumes a parsed [`Program`] and runs six passes over
//! it, in a fixed order, each assuming every earlier pass succeeded:
//! declaration binding, type resolution, call resolution, name
//! resolution, control-flow placement, and type checking. The pipeline
//! stops at the first diagnostic; a whole run reports at most one
//! [`AnalysisError`].
//!
//! The input AST is never mutated. Every artifact the passes produce
//! (the global environment, the scope tree, and the per-node resolution
//! and type tables) lives in the returned [`Analysis`], keyed by the
//! node ids the parser assigned. Running the analyzer twice on the same
//! program yields identical results; no state survives a run.
//!
//! ```
//! use mica_analyzer::analyze;
//! use mica_ast::Program;
//! use mica_core::Span;
//!
//! let program = Program { decls: vec![], span: Span::new(1, 1, 0) };
//! let analysis = analyze(&program)?;
//! assert!(analysis.expr_types.is_empty());
//! # Ok::<(), mica_core::AnalysisError>(())
//! ```

pub mod conversion;
pub mod env;
pub mod passes;
pub mod scope;

#[cfg(test)]
mod testutil;

use log::debug;
use mica_ast::Program;
use mica_core::{AnalysisError, FuncId, NodeId, Type};
use rustc_hash::FxHashMap;

use env::GlobalEnv;
use passes::{
    BindPass, CallResolvePass, CheckPass, ControlPass, NamePass, TypeResolvePass, VarBinding,
};
use scope::ScopeArena;

pub use passes::NameResolution;

/// Everything the declaration and resolution passes (1 through 4)
/// know about a program.
#[derive(Debug)]
pub struct SymbolTable {
    /// Global type and function namespaces.
    pub env: GlobalEnv,
    /// Resolved type for every type expression node.
    pub type_refs: FxHashMap<NodeId, Type>,
    /// Resolved target for every call expression node.
    pub call_targets: FxHashMap<NodeId, FuncId>,
    /// The scope tree built over the function bodies.
    pub scopes: ScopeArena,
    /// Binding for every resolved identifier use.
    pub bindings: FxHashMap<NodeId, VarBinding>,
}

/// The complete result of a successful analysis run.
#[derive(Debug)]
pub struct Analysis {
    pub symbols: SymbolTable,
    /// Inferred type for every expression node in the program.
    pub expr_types: FxHashMap<NodeId, Type>,
}

/// Run passes 1 through 4: bind declarations and resolve every name.
///
/// Useful on its own for tooling that needs resolution but not full
/// type checking.
pub fn build_symbols(program: &Program) -> Result<SymbolTable, AnalysisError> {
    let mut env = GlobalEnv::new();
    BindPass::new(&mut env).run(program)?;
    let type_refs = TypeResolvePass::new(&mut env).run(program)?;
    let call_targets = CallResolvePass::new(&env).run(program)?;
    let NameResolution { scopes, bindings } = NamePass::new(&type_refs).run(program)?;
    Ok(SymbolTable {
        env,
        type_refs,
        call_targets,
        scopes,
        bindings,
    })
}

/// Run the full six-pass analysis.
pub fn analyze(program: &Program) -> Result<Analysis, AnalysisError> {
    let symbols = build_symbols(program)?;
    ControlPass::new().run(program)?;
    let expr_types = CheckPass::new(
        &symbols.env,
        &symbols.type_refs,
        &symbols.call_targets,
        &symbols.bindings,
    )
    .run(program)?;
    debug!("analysis complete: {} expression(s) typed", expr_types.len());
    Ok(Analysis {
        symbols,
        expr_types,
    })
}
