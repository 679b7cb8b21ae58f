//! The six analysis passes.
//!
//! Passes run in a fixed order over one shared environment; each pass
//! may assume every earlier pass succeeded:
//!
//! 1. [`BindPass`]: collect struct and function declarations, detect
//!    name clashes.
//! 2. [`TypeResolvePass`]: resolve every syntactic type reference.
//! 3. [`CallResolvePass`]: resolve every call to a declared function.
//! 4. [`NamePass`]: build the scope tree, detect variable clashes and
//!    self-initialization, resolve identifier uses.
//! 5. [`ControlPass`]: validate break/continue placement.
//! 6. [`CheckPass`]: type every expression and statement.
//!
//! Each pass returns its artifact or the first diagnostic encountered
//! in declaration order, then depth-first statement/expression order;
//! the pipeline in the crate root stops at the first failing pass.

pub mod bind;
pub mod check;
pub mod control;
pub mod names;
pub mod resolve_calls;
pub mod resolve_types;

pub use bind::BindPass;
pub use check::CheckPass;
pub use control::ControlPass;
pub use names::{NamePass, NameResolution, VarBinding};
pub use resolve_calls::CallResolvePass;
pub use resolve_types::TypeResolvePass;

pub(crate) type Result<T> = std::result::Result<T, mica_core::AnalysisError>;
