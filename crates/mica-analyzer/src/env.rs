//! The global environment: type and function namespaces.
//!
//! A [`GlobalEnv`] is constructed fresh for every analysis run and owns
//! the two global namespaces. Primitive type names and built-in function
//! names are reserved and pre-populate it; the declaration binder adds
//! user structs and functions, reporting a clash when a name is already
//! live. Uniqueness is enforced independently per namespace, but
//! reserved names are reserved in both: a user function named `int`
//! clashes just as a user type named `print` does.

use mica_core::{AnalysisError, DeclSite, FuncId, NodeId, Primitive, Span, Type};
use rustc_hash::FxHashMap;

/// A function known to the analyzer: a built-in or a user declaration.
///
/// Signatures of user functions are placeholders until the type
/// resolution pass fills them in.
#[derive(Debug, Clone)]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<Type>,
    pub ret: Type,
    /// Where the function was declared; `DeclSite::BUILTIN` for built-ins.
    pub site: DeclSite,
    /// The declaring AST node, for user functions.
    pub decl: Option<NodeId>,
}

/// A user-declared struct and its ordered fields.
///
/// Fields are empty until the type resolution pass fills them in.
#[derive(Debug, Clone)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<(String, Type)>,
    pub span: Span,
    pub decl: NodeId,
}

impl StructDef {
    /// The type of the named field, if the struct has it.
    pub fn field_type(&self, name: &str) -> Option<&Type> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, ty)| ty)
    }
}

/// The global type and function namespaces for one analysis run.
#[derive(Debug)]
pub struct GlobalEnv {
    structs: FxHashMap<String, StructDef>,
    functions: FxHashMap<String, FuncId>,
    funcs: Vec<FuncDef>,
}

impl GlobalEnv {
    /// Create an environment pre-populated with the built-in functions.
    pub fn new() -> Self {
        let mut env = Self {
            structs: FxHashMap::default(),
            functions: FxHashMap::default(),
            funcs: Vec::new(),
        };
        env.install_builtins();
        env
    }

    /// Whether a name is reserved: a primitive type name or a built-in
    /// function name.
    pub fn is_reserved(&self, name: &str) -> bool {
        Primitive::from_name(name).is_some() || self.is_builtin_function(name)
    }

    fn is_builtin_function(&self, name: &str) -> bool {
        self.functions
            .get(name)
            .is_some_and(|id| self.func(*id).site == DeclSite::BUILTIN)
    }

    /// Register a user struct, or report a `TypeClash`.
    pub fn add_struct(
        &mut self,
        name: &str,
        decl: NodeId,
        span: Span,
    ) -> Result<(), AnalysisError> {
        if self.is_reserved(name) {
            return Err(AnalysisError::TypeClash {
                name: name.to_string(),
                span,
                previous: DeclSite::BUILTIN,
            });
        }
        if let Some(existing) = self.structs.get(name) {
            return Err(AnalysisError::TypeClash {
                name: name.to_string(),
                span,
                previous: DeclSite::at(existing.span),
            });
        }
        self.structs.insert(
            name.to_string(),
            StructDef {
                name: name.to_string(),
                fields: Vec::new(),
                span,
                decl,
            },
        );
        Ok(())
    }

    /// Register a user function, or report a `FunctionClash`.
    ///
    /// The signature starts as a placeholder; the type resolution pass
    /// fills it in once parameter and return type names are resolved.
    pub fn add_function(
        &mut self,
        name: &str,
        decl: NodeId,
        span: Span,
    ) -> Result<FuncId, AnalysisError> {
        if self.is_reserved(name) {
            return Err(AnalysisError::FunctionClash {
                name: name.to_string(),
                span,
                previous: DeclSite::BUILTIN,
            });
        }
        if let Some(existing) = self.functions.get(name) {
            return Err(AnalysisError::FunctionClash {
                name: name.to_string(),
                span,
                previous: self.func(*existing).site,
            });
        }
        Ok(self.push_func(FuncDef {
            name: name.to_string(),
            params: Vec::new(),
            ret: Type::VOID,
            site: DeclSite::at(span),
            decl: Some(decl),
        }))
    }

    /// Resolve a type name: a primitive, or a declared struct.
    pub fn lookup_type(&self, name: &str) -> Option<Type> {
        if let Some(prim) = Primitive::from_name(name) {
            return Some(Type::Primitive(prim));
        }
        self.structs.get(name).map(|_| Type::Struct(name.to_string()))
    }

    /// Resolve a function name, built-ins included.
    pub fn lookup_function(&self, name: &str) -> Option<FuncId> {
        self.functions.get(name).copied()
    }

    /// The definition behind a function id.
    pub fn func(&self, id: FuncId) -> &FuncDef {
        &self.funcs[id.0 as usize]
    }

    /// Mutable access for the type resolution pass.
    pub fn func_mut(&mut self, id: FuncId) -> &mut FuncDef {
        &mut self.funcs[id.0 as usize]
    }

    /// The struct definition behind a declared struct name.
    pub fn struct_def(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name)
    }

    /// Mutable access for the type resolution pass.
    pub fn struct_def_mut(&mut self, name: &str) -> Option<&mut StructDef> {
        self.structs.get_mut(name)
    }

    fn push_func(&mut self, def: FuncDef) -> FuncId {
        let id = FuncId(self.funcs.len() as u32);
        self.functions.insert(def.name.clone(), id);
        self.funcs.push(def);
        id
    }

    fn builtin(&mut self, name: &str, params: &[Type], ret: Type) {
        self.push_func(FuncDef {
            name: name.to_string(),
            params: params.to_vec(),
            ret,
            site: DeclSite::BUILTIN,
            decl: None,
        });
    }

    fn install_builtins(&mut self) {
        // Pairwise conversions among the convertible primitives.
        let convertible = [Type::INT, Type::LONG, Type::DOUBLE, Type::STRING];
        for from in &convertible {
            for to in &convertible {
                if from != to {
                    let name = format!("{from}_to_{to}");
                    self.builtin(&name, &[from.clone()], to.clone());
                }
            }
        }
        self.builtin("boolean_to_string", &[Type::BOOLEAN], Type::STRING);
        self.builtin("string_to_boolean", &[Type::STRING], Type::BOOLEAN);

        // String functions.
        self.builtin("length", &[Type::STRING], Type::INT);
        self.builtin("substr", &[Type::STRING, Type::INT, Type::INT], Type::STRING);
        self.builtin("ordinal", &[Type::STRING], Type::INT);
        self.builtin("character", &[Type::INT], Type::STRING);

        // Numerical functions.
        self.builtin("pow", &[Type::DOUBLE, Type::DOUBLE], Type::DOUBLE);
        self.builtin("sqrt", &[Type::DOUBLE], Type::DOUBLE);
        self.builtin("ceil", &[Type::DOUBLE], Type::DOUBLE);
        self.builtin("floor", &[Type::DOUBLE], Type::DOUBLE);

        // I/O functions.
        self.builtin("print", &[Type::STRING], Type::VOID);
        self.builtin("println", &[Type::STRING], Type::VOID);
        self.builtin("peekchar", &[], Type::STRING);
        self.builtin("readchar", &[], Type::STRING);
        self.builtin("readline", &[], Type::STRING);

        self.builtin("exit", &[Type::INT], Type::VOID);
    }
}

impl Default for GlobalEnv {
    fn default() -> Self {
        Self::new()
    }
}
