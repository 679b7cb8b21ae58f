//! Pass 1: declaration binding.
//!
//! Walks the top-level declarations once, in order, registering each
//! struct into the type namespace and each function into the function
//! namespace. Clash checks use name equality alone, independent of
//! signature: a second declaration of a live name, or any declaration
//! reusing a reserved built-in name, halts the pass with `TypeClash` or
//! `FunctionClash`. On success the global namespaces are closed; no
//! later pass registers anything.

use log::debug;
use mica_ast::{Decl, Program};

use crate::env::GlobalEnv;

use super::Result;

/// Pass 1: collect global declarations and detect name clashes.
pub struct BindPass<'a> {
    env: &'a mut GlobalEnv,
}

impl<'a> BindPass<'a> {
    /// Create a binder over a fresh environment.
    pub fn new(env: &'a mut GlobalEnv) -> Self {
        Self { env }
    }

    /// Run the pass over a program.
    pub fn run(mut self, program: &Program) -> Result<()> {
        let mut structs = 0usize;
        let mut functions = 0usize;
        for decl in &program.decls {
            match decl {
                Decl::Struct(s) => {
                    self.env.add_struct(&s.name.name, s.id, s.name.span)?;
                    structs += 1;
                }
                Decl::Function(f) => {
                    self.env.add_function(&f.name.name, f.id, f.name.span)?;
                    functions += 1;
                }
            }
        }
        debug!("bind: registered {structs} struct(s), {functions} function(s)");
        Ok(())
    }
}
