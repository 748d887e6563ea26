//! Canonical default values for well-known scalar types.
//!
//! Boxed and named scalars (`Integer`, `String`, `Date`, ...) are looked up by their
//! presentable name, language primitives (`int`, `boolean`, ...) have their own table.
//! Date-like types default to an empty string, not a formatted date.

use crate::{IndexMap, Number, ObjectValue, PrimitiveValue};
use once_cell::sync::Lazy;

pub static DEFAULT_VALUES: Lazy<IndexMap<&'static str, PrimitiveValue>> = Lazy::new(|| {
    let integral = PrimitiveValue::Number(Number::zero());
    let float = PrimitiveValue::Number(Number::float_zero());
    let empty = PrimitiveValue::String(String::new());
    [
        ("Boolean", PrimitiveValue::Bool(false)),
        ("Byte", integral.clone()),
        ("Short", integral.clone()),
        ("Integer", integral.clone()),
        ("Long", integral.clone()),
        ("BigInteger", integral),
        ("Float", float.clone()),
        ("Double", float.clone()),
        ("BigDecimal", float),
        ("String", empty.clone()),
        ("Character", empty.clone()),
        ("Date", empty.clone()),
        ("LocalDate", empty.clone()),
        ("LocalDateTime", empty.clone()),
        ("LocalTime", empty.clone()),
        ("Instant", empty.clone()),
        ("ZonedDateTime", empty.clone()),
        ("OffsetDateTime", empty),
    ]
    .into_iter()
    .collect()
});

pub static PRIMITIVE_DEFAULTS: Lazy<IndexMap<&'static str, PrimitiveValue>> = Lazy::new(|| {
    let integral = PrimitiveValue::Number(Number::zero());
    let float = PrimitiveValue::Number(Number::float_zero());
    [
        ("boolean", PrimitiveValue::Bool(false)),
        ("byte", integral.clone()),
        ("short", integral.clone()),
        ("int", integral.clone()),
        ("long", integral),
        ("float", float.clone()),
        ("double", float),
        ("char", PrimitiveValue::String(String::new())),
    ]
    .into_iter()
    .collect()
});

/// Default for a named scalar, `None` when `type_name` is not a recognized scalar.
#[inline]
pub fn lookup(type_name: &str) -> Option<ObjectValue> {
    DEFAULT_VALUES
        .get(type_name)
        .cloned()
        .map(ObjectValue::Primitive)
}

#[inline]
pub fn is_scalar(type_name: &str) -> bool {
    DEFAULT_VALUES.contains_key(type_name)
}

#[inline]
pub fn primitive_default(name: &str) -> Option<ObjectValue> {
    PRIMITIVE_DEFAULTS
        .get(name)
        .cloned()
        .map(ObjectValue::Primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PRIMITIVES;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn scalar_defaults() {
        assert_eq!(lookup("Boolean"), Some(false.into()));
        for name in ["Byte", "Short", "Integer", "Long", "BigInteger"] {
            assert_eq!(lookup(name), Some(0.into()), "{name}");
        }
        for name in ["Float", "Double", "BigDecimal"] {
            assert_eq!(lookup(name), Some(0.0.into()), "{name}");
        }
        for name in ["String", "Date", "LocalDateTime"] {
            assert_eq!(lookup(name), Some("".into()), "{name}");
        }
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn unknown_names_are_not_scalars() {
        assert_eq!(lookup("Role"), None);
        assert_eq!(lookup("integer"), None);
        assert!(!is_scalar("List"));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn every_primitive_has_a_default() {
        for name in PRIMITIVES {
            assert!(primitive_default(name).is_some(), "{name}");
        }
        assert_eq!(primitive_default("int"), Some(0.into()));
        assert_eq!(primitive_default("double"), Some(0.0.into()));
        assert_eq!(primitive_default("boolean"), Some(false.into()));
        assert_eq!(primitive_default("Integer"), None);
    }
}
