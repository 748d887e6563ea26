use crate::{IndexMap, Number, ObjectValue, PrimitiveValue, SkeletonError};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Insertion ordered JSON object.
///
/// Setting an existing key replaces its value in place, the key keeps the position
/// it was first inserted at. Equality compares entries in order.
#[derive(Clone, Debug, Default)]
pub struct JsonObject {
    entries: IndexMap<String, ObjectValue>,
}

impl JsonObject {
    #[inline]
    pub fn new() -> Self {
        JsonObject::default()
    }

    pub fn by<K: Into<String>, V: Into<ObjectValue>>(key: K, value: V) -> Self {
        let mut object = JsonObject::new();
        object.set(key, value);
        object
    }

    #[inline]
    pub fn set<K: Into<String>, V: Into<ObjectValue>>(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Sets every entry of `other`, in its order.
    pub fn merge(&mut self, other: JsonObject) -> &mut Self {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
        self
    }

    /// Removes `key`, remaining keys keep their relative order.
    #[inline]
    pub fn delete(&mut self, key: &str) -> &mut Self {
        self.entries.shift_remove(key);
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&ObjectValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn primitive(&self, key: &str) -> Option<&PrimitiveValue> {
        self.get(key).and_then(ObjectValue::as_primitive)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.primitive(key).and_then(PrimitiveValue::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.primitive(key)?.as_number()? {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.primitive(key)
            .and_then(PrimitiveValue::as_number)
            .map(Number::to_float)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.primitive(key).and_then(PrimitiveValue::as_bool)
    }

    pub fn get_object(&self, key: &str) -> Option<&JsonObject> {
        self.get(key).and_then(ObjectValue::as_object)
    }

    pub fn get_list(&self, key: &str) -> Option<&Vec<ObjectValue>> {
        self.get(key).and_then(ObjectValue::as_list)
    }

    /// Missing keys count as null.
    pub fn is_null(&self, key: &str) -> bool {
        self.get(key).map_or(true, ObjectValue::is_null)
    }

    #[inline]
    pub fn not_null(&self, key: &str) -> bool {
        !self.is_null(key)
    }

    #[inline]
    pub fn is_true(&self, key: &str) -> bool {
        self.get_bool(key) == Some(true)
    }

    #[inline]
    pub fn is_false(&self, key: &str) -> bool {
        self.get_bool(key) == Some(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ObjectValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn to_json_text(&self, pretty: bool) -> Result<String, SkeletonError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    #[inline]
    pub fn to_json(&self) -> Result<String, SkeletonError> {
        self.to_json_text(false)
    }

    #[inline]
    pub fn to_pretty_json(&self) -> Result<String, SkeletonError> {
        self.to_json_text(true)
    }
}

impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for JsonObject {}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl Display for JsonObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let json = self.to_json().map_err(|_| std::fmt::Error)?;
        write!(f, "{json}")
    }
}

impl<K: Into<String>, V: Into<ObjectValue>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = JsonObject::new();
        for (key, value) in iter {
            object.set(key, value);
        }
        object
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, ObjectValue);
    type IntoIter = indexmap::map::IntoIter<String, ObjectValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
