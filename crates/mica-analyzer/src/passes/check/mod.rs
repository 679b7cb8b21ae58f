//! Pass 6: type checking.
//!
//! The final pass types every expression and validates every statement
//! against the signatures, scopes, and call targets the earlier passes
//! produced. It is the only pass that consults the conversion rules:
//! wherever a value meets an expected type (initializers, assignments,
//! call arguments, constructor arguments, return values) the value's
//! type must be convertible to the expected one.
//!
//! The pass also performs the all-paths-return analysis: a non-void
//! function whose body can fall off the end is `MissingReturn`. Loops
//! are never assumed to run, so only returns and exhaustive `if`/`else`
//! chains guarantee a return.
//!
//! The artifact is the expression type table: one entry per expression
//! node in the program, populated exactly once.

mod expr;
mod stmt;

use log::debug;
use mica_ast::{Decl, Program};
use mica_core::{FuncId, NodeId, Type};
use rustc_hash::FxHashMap;

use crate::env::GlobalEnv;
use crate::passes::VarBinding;

use super::Result;

/// Pass 6: type every expression, validate every statement.
pub struct CheckPass<'a> {
    env: &'a GlobalEnv,
    type_refs: &'a FxHashMap<NodeId, Type>,
    call_targets: &'a FxHashMap<NodeId, FuncId>,
    bindings: &'a FxHashMap<NodeId, VarBinding>,
    expr_types: FxHashMap<NodeId, Type>,
    /// Return type of the function currently being checked.
    ret: Type,
}

impl<'a> CheckPass<'a> {
    pub fn new(
        env: &'a GlobalEnv,
        type_refs: &'a FxHashMap<NodeId, Type>,
        call_targets: &'a FxHashMap<NodeId, FuncId>,
        bindings: &'a FxHashMap<NodeId, VarBinding>,
    ) -> Self {
        Self {
            env,
            type_refs,
            call_targets,
            bindings,
            expr_types: FxHashMap::default(),
            ret: Type::VOID,
        }
    }

    /// Run the pass, returning the expression type table.
    pub fn run(mut self, program: &Program) -> Result<FxHashMap<NodeId, Type>> {
        for decl in &program.decls {
            if let Decl::Function(f) = decl {
                self.check_function(f)?;
            }
        }
        debug!("check: typed {} expression(s)", self.expr_types.len());
        Ok(self.expr_types)
    }

    /// The resolved type behind a type expression node.
    ///
    /// Pass 2 resolved every type reference, so a miss is a defect.
    fn resolved_type(&self, id: NodeId) -> Type {
        self.type_refs
            .get(&id)
            .unwrap_or_else(|| panic!("type reference {id:?} not resolved"))
            .clone()
    }

    fn record(&mut self, id: NodeId, ty: Type) -> Type {
        self.expr_types.insert(id, ty.clone());
        ty
    }
}
