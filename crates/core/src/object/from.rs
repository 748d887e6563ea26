use crate::{JsonObject, ObjectValue, PrimitiveValue};

impl<T: Into<PrimitiveValue>> From<T> for ObjectValue {
    #[inline]
    fn from(v: T) -> ObjectValue {
        ObjectValue::Primitive(v.into())
    }
}

impl<T: Into<ObjectValue>> From<Vec<T>> for ObjectValue {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        ObjectValue::List(value.into_iter().map(|v| v.into()).collect())
    }
}

impl From<JsonObject> for ObjectValue {
    #[inline]
    fn from(value: JsonObject) -> Self {
        ObjectValue::Object(value)
    }
}

impl<T: Into<ObjectValue>> From<Option<T>> for ObjectValue {
    fn from(value: Option<T>) -> Self {
        match value {
            None => ObjectValue::default(),
            Some(v) => v.into(),
        }
    }
}
