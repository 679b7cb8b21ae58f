//! Implicit conversion and numeric promotion rules.
//!
//! Mica permits widening among the numeric primitives (int → long,
//! int → double, long → double) and converts `null` to any struct or
//! array type. Everything else requires exact type equality: structs
//! nominally by name, arrays structurally by element type. There is no
//! implicit narrowing.

use mica_core::{Primitive, Type};

/// Whether a numeric widening exists from one primitive to another.
fn widens(from: Primitive, to: Primitive) -> bool {
    matches!(
        (from, to),
        (Primitive::Int, Primitive::Long)
            | (Primitive::Int, Primitive::Double)
            | (Primitive::Long, Primitive::Double)
    )
}

/// Whether a value of type `from` may be used where `to` is expected.
pub fn is_convertible(from: &Type, to: &Type) -> bool {
    if from == to {
        return true;
    }
    match (from, to) {
        (Type::Primitive(a), Type::Primitive(b)) => widens(*a, *b),
        (Type::Primitive(Primitive::Null), Type::Struct(_) | Type::Array(_)) => true,
        _ => false,
    }
}

/// The common type of a binary numeric operation, by widening.
///
/// Returns `None` when either side is not numeric.
pub fn join_numeric(lhs: &Type, rhs: &Type) -> Option<Type> {
    if !lhs.is_numeric() || !rhs.is_numeric() {
        return None;
    }
    if is_convertible(lhs, rhs) {
        Some(rhs.clone())
    } else {
        // Numeric widening is total and antisymmetric, so the other
        // direction must hold.
        Some(lhs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_conversions() {
        assert!(is_convertible(&Type::INT, &Type::INT));
        assert!(is_convertible(
            &Type::Struct("Point".into()),
            &Type::Struct("Point".into())
        ));
        assert!(is_convertible(&Type::INT.array_of(), &Type::INT.array_of()));
    }

    #[test]
    fn widening_is_one_way() {
        assert!(is_convertible(&Type::INT, &Type::LONG));
        assert!(is_convertible(&Type::INT, &Type::DOUBLE));
        assert!(is_convertible(&Type::LONG, &Type::DOUBLE));
        assert!(!is_convertible(&Type::LONG, &Type::INT));
        assert!(!is_convertible(&Type::DOUBLE, &Type::LONG));
    }

    #[test]
    fn null_converts_to_reference_types() {
        assert!(is_convertible(&Type::NULL, &Type::Struct("Point".into())));
        assert!(is_convertible(&Type::NULL, &Type::DOUBLE.array_of()));
        assert!(!is_convertible(&Type::NULL, &Type::INT));
        assert!(!is_convertible(&Type::Struct("Point".into()), &Type::NULL));
    }

    #[test]
    fn no_cross_kind_conversions() {
        assert!(!is_convertible(&Type::STRING, &Type::INT));
        assert!(!is_convertible(&Type::INT.array_of(), &Type::LONG.array_of()));
        assert!(!is_convertible(
            &Type::Struct("Point".into()),
            &Type::Struct("Vec".into())
        ));
    }

    #[test]
    fn join_picks_the_wider_type() {
        assert_eq!(join_numeric(&Type::INT, &Type::LONG), Some(Type::LONG));
        assert_eq!(join_numeric(&Type::DOUBLE, &Type::INT), Some(Type::DOUBLE));
        assert_eq!(join_numeric(&Type::INT, &Type::INT), Some(Type::INT));
        assert_eq!(join_numeric(&Type::INT, &Type::BOOLEAN), None);
    }
}
