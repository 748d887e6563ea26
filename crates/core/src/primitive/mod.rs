mod error;

pub use error::SkeletonError;

use crate::{impl_from, Number};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single JSON scalar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    #[default]
    None,
    Bool(bool),
    Number(Number),
    String(String),
}

impl_from! {
    bool, PrimitiveValue, PrimitiveValue::Bool;
    String, PrimitiveValue, PrimitiveValue::String;
    Number, PrimitiveValue, PrimitiveValue::Number;
}

impl From<&'_ str> for PrimitiveValue {
    #[inline]
    fn from(value: &'_ str) -> Self {
        PrimitiveValue::String(value.to_string())
    }
}

macro_rules! impl_from_number {
    ($($From:ty),*) => {
        $(
            impl From<$From> for PrimitiveValue {
                #[inline]
                fn from(value: $From) -> Self {
                    PrimitiveValue::Number(value.into())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<()> for PrimitiveValue {
    #[inline]
    fn from(_value: ()) -> Self {
        PrimitiveValue::None
    }
}

impl PrimitiveValue {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, PrimitiveValue::None)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrimitiveValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            PrimitiveValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimitiveValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Display for PrimitiveValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveValue::None => write!(f, "null"),
            PrimitiveValue::Bool(v) => write!(f, "{v}"),
            PrimitiveValue::Number(v) => write!(f, "{v}"),
            PrimitiveValue::String(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
pub mod value_tests {
    use crate::{Number, PrimitiveValue};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn value_eq_is_strict() {
        assert_eq!(PrimitiveValue::None, PrimitiveValue::None);
        assert_ne!(PrimitiveValue::None, PrimitiveValue::Bool(false));
        assert_ne!(PrimitiveValue::None, PrimitiveValue::String(String::new()));
        assert_ne!(
            PrimitiveValue::Number(Number::Int(0)),
            PrimitiveValue::String(String::new())
        );
        assert_eq!(PrimitiveValue::from(0), PrimitiveValue::Number(Number::Int(0)));
        assert_eq!(PrimitiveValue::from(""), PrimitiveValue::String(String::new()));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn accessors() {
        assert_eq!(PrimitiveValue::from(true).as_bool(), Some(true));
        assert_eq!(PrimitiveValue::from("a").as_str(), Some("a"));
        assert_eq!(PrimitiveValue::from(0.0).as_number(), Some(Number::Float(0.0)));
        assert!(PrimitiveValue::from(()).is_none());
        assert_eq!(PrimitiveValue::from(1).as_bool(), None);
    }
}
