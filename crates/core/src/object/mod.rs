mod from;
mod json_object;

use crate::PrimitiveValue;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub use json_object::JsonObject;

/// Any JSON value a skeleton can hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ObjectValue {
    Primitive(PrimitiveValue),
    List(Vec<ObjectValue>),
    Object(JsonObject),
}

impl Default for ObjectValue {
    fn default() -> Self {
        ObjectValue::Primitive(PrimitiveValue::default())
    }
}

impl Display for ObjectValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{json}")
    }
}

impl ObjectValue {
    #[inline]
    pub fn null() -> Self {
        ObjectValue::default()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ObjectValue::Primitive(PrimitiveValue::None))
    }

    #[inline]
    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            ObjectValue::Primitive(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&Vec<ObjectValue>> {
        match self {
            ObjectValue::List(l) => Some(l),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            ObjectValue::Object(o) => Some(o),
            _ => None,
        }
    }
}
