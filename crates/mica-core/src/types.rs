//! The semantic type model for Mica.
//!
//! [`Type`] is a closed sum over everything a Mica expression can have
//! as a type. Equality is structural for arrays and function signatures
//! and nominal (by name) for structs and primitives, which the derived
//! `PartialEq` gives us directly because a struct type carries only its
//! declared name; field lists live in the analyzer's global environment.

use std::fmt;

/// The built-in primitive types.
///
/// `Null` is the type of the `null` literal; it is convertible to any
/// struct or array type. Like the other primitives its name resolves as
/// a type, so `null` is reserved in the declaration namespaces too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Long,
    Double,
    Boolean,
    String,
    Void,
    Null,
}

impl Primitive {
    /// All primitive type names, in declaration-reserved order.
    pub const ALL: [Primitive; 7] = [
        Primitive::Int,
        Primitive::Long,
        Primitive::Double,
        Primitive::Boolean,
        Primitive::String,
        Primitive::Void,
        Primitive::Null,
    ];

    /// The source-level name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Double => "double",
            Primitive::Boolean => "boolean",
            Primitive::String => "string",
            Primitive::Void => "void",
            Primitive::Null => "null",
        }
    }

    /// Look up a primitive by its source-level name.
    pub fn from_name(name: &str) -> Option<Primitive> {
        Primitive::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Whether this is one of the numeric types (int, long, double).
    pub fn is_numeric(self) -> bool {
        matches!(self, Primitive::Int | Primitive::Long | Primitive::Double)
    }

    /// Whether this is one of the integral types (int, long).
    pub fn is_integral(self) -> bool {
        matches!(self, Primitive::Int | Primitive::Long)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved Mica type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A primitive type.
    Primitive(Primitive),
    /// An array of some element type.
    Array(Box<Type>),
    /// A user-declared struct, identified nominally by its name.
    Struct(String),
    /// A function signature: ordered parameter types and a return type.
    Function(Vec<Type>, Box<Type>),
}

impl Type {
    pub const INT: Type = Type::Primitive(Primitive::Int);
    pub const LONG: Type = Type::Primitive(Primitive::Long);
    pub const DOUBLE: Type = Type::Primitive(Primitive::Double);
    pub const BOOLEAN: Type = Type::Primitive(Primitive::Boolean);
    pub const STRING: Type = Type::Primitive(Primitive::String);
    pub const VOID: Type = Type::Primitive(Primitive::Void);
    pub const NULL: Type = Type::Primitive(Primitive::Null);

    /// The array type with this type as its element type.
    pub fn array_of(self) -> Type {
        Type::Array(Box::new(self))
    }

    /// The primitive this type is, if it is one.
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Type::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// The element type, if this is an array type.
    pub fn elem_type(&self) -> Option<&Type> {
        match self {
            Type::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// The struct name, if this is a struct type.
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            Type::Struct(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this is a numeric primitive (int, long, double).
    pub fn is_numeric(&self) -> bool {
        self.as_primitive().is_some_and(Primitive::is_numeric)
    }

    /// Whether this is an integral primitive (int, long).
    pub fn is_integral(&self) -> bool {
        self.as_primitive().is_some_and(Primitive::is_integral)
    }

    pub fn is_boolean(&self) -> bool {
        *self == Type::BOOLEAN
    }

    pub fn is_string(&self) -> bool {
        *self == Type::STRING
    }

    pub fn is_void(&self) -> bool {
        *self == Type::VOID
    }

    pub fn is_null(&self) -> bool {
        *self == Type::NULL
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => write!(f, "{p}"),
            Type::Array(elem) => write!(f, "{elem}[]"),
            Type::Struct(name) => f.write_str(name),
            Type::Function(params, ret) => {
                f.write_str("function(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {ret}")
            }
        }
    }
}
