use crate::TypeResolver;
use jsonskel_core::{CompositeType, IndexMap, SkeletonError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// In memory [`TypeResolver`] keyed by type name.
///
/// Loads from and saves to the model format
/// `{"types": [{"name": "...", "extends": "...", "fields": [...]}]}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeRegistry {
    types: IndexMap<String, CompositeType>,
}

#[derive(Serialize, Deserialize)]
struct Model {
    #[serde(default)]
    types: Vec<CompositeType>,
}

impl TypeRegistry {
    #[inline]
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// Adds `composite`, a type registered under the same name is replaced.
    pub fn register(&mut self, composite: CompositeType) -> &mut Self {
        if let Some(previous) = self.types.insert(composite.name.clone(), composite) {
            warn!("{} registered twice, keeping the latest definition", previous.name);
        }
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&CompositeType> {
        self.types.get(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositeType> {
        self.types.values()
    }

    pub fn from_json(json: &str) -> Result<Self, SkeletonError> {
        let model: Model =
            serde_json::from_str(json).map_err(|e| SkeletonError::Model(e.to_string()))?;
        let registry: TypeRegistry = model.types.into_iter().collect();
        debug!("loaded {} types", registry.len());
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String, SkeletonError> {
        let model = Model {
            types: self.types.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&model)?)
    }
}

impl FromIterator<CompositeType> for TypeRegistry {
    fn from_iter<T: IntoIterator<Item = CompositeType>>(iter: T) -> Self {
        let mut registry = TypeRegistry::new();
        for composite in iter {
            registry.register(composite);
        }
        registry
    }
}

impl TypeResolver for TypeRegistry {
    #[inline]
    fn composite(&self, id: &str) -> Option<&CompositeType> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonskel_core::TypeRef;
    use pretty_assertions::assert_eq;

    #[test]
    fn model_round_trip() {
        let json = r#"{"types":[{"name":"Role","fields":[{"name":"name","type":"String"}]}]}"#;
        let registry = TypeRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("Role"),
            Some(&CompositeType::new("Role").field("name", TypeRef::scalar("String")))
        );
        assert_eq!(TypeRegistry::from_json(&registry.to_json().unwrap()).unwrap(), registry);
    }

    #[test]
    fn invalid_models() {
        for json in [
            "",
            r#"{"types":[{"fields":[]}]}"#,
            r#"{"types":[{"name":"A","fields":[{"name":"a","type":"List<"}]}]}"#,
        ] {
            assert!(
                matches!(TypeRegistry::from_json(json), Err(SkeletonError::Model(_))),
                "{json} should not load"
            );
        }
    }

    #[test]
    fn later_registration_wins() {
        let registry = TypeRegistry::from_iter([
            CompositeType::new("A").field("old", TypeRef::primitive("int")),
            CompositeType::new("A").field("new", TypeRef::primitive("int")),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("A").unwrap().fields[0].name, "new");
    }

    #[test]
    fn inherited_fields_follow_own_fields() {
        let registry = TypeRegistry::from_iter([
            CompositeType::new("Base")
                .field("id", TypeRef::primitive("long"))
                .field("active", TypeRef::primitive("boolean")),
            CompositeType::new("Admin")
                .extending("Base")
                .field("name", TypeRef::scalar("String"))
                .field("id", TypeRef::scalar("Long")),
        ]);
        let admin = registry.get("Admin").unwrap();
        let names: Vec<_> = registry
            .fields_of(admin)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["name", "id", "active"]);
    }

    #[test]
    fn cyclic_extends_terminates() {
        let registry = TypeRegistry::from_iter([
            CompositeType::new("X")
                .extending("Y")
                .field("x", TypeRef::primitive("int")),
            CompositeType::new("Y")
                .extending("X")
                .field("y", TypeRef::primitive("int")),
        ]);
        let x = registry.get("X").unwrap();
        assert_eq!(registry.fields_of(x).len(), 2);
    }

    #[test]
    fn classify_refines_scalar_class_references() {
        let registry = TypeRegistry::new();
        assert_eq!(
            registry.classify(&TypeRef::class("Integer")),
            TypeRef::scalar("Integer")
        );
        assert_eq!(registry.classify(&TypeRef::class("Role")), TypeRef::class("Role"));
        assert_eq!(registry.resolve(&TypeRef::class("Role")), None);
    }
}
