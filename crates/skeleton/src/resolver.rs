use jsonskel_core::{defaults, CompositeType, FieldDescriptor, IndexSet, ObjectValue, TypeRef};
use log::warn;

/// Type introspection the skeleton builder relies on.
///
/// Only [`TypeResolver::composite`] is required, the rest default to the
/// [`TypeRef`] shape and the built in default table.
pub trait TypeResolver {
    /// Composite definition registered under `id`, `None` when the type is opaque or unknown.
    fn composite(&self, id: &str) -> Option<&CompositeType>;

    fn resolve(&self, ty: &TypeRef) -> Option<&CompositeType> {
        ty.class_id().and_then(|id| self.composite(id))
    }

    /// Refines a reference into its final shape, class references that name a known
    /// scalar become [`TypeRef::NamedScalar`].
    fn classify(&self, ty: &TypeRef) -> TypeRef {
        match ty {
            TypeRef::ClassReference(id) if defaults::is_scalar(id) => TypeRef::scalar(id.clone()),
            ty => ty.clone(),
        }
    }

    /// Own fields in declaration order followed by inherited fields. An inherited field
    /// whose name is already present is hidden.
    fn fields_of(&self, composite: &CompositeType) -> Vec<FieldDescriptor> {
        let mut fields = composite.fields.clone();
        let mut visited: IndexSet<&str> = IndexSet::default();
        visited.insert(composite.name.as_str());
        let mut parent = composite.extends.as_deref();
        while let Some(name) = parent {
            if !visited.insert(name) {
                warn!("{} has a cyclic extends chain at {name}", composite.name);
                break;
            }
            let Some(definition) = self.composite(name) else {
                warn!("{} extends unknown type {name}", composite.name);
                break;
            };
            for field in &definition.fields {
                if !fields.iter().any(|f| f.name == field.name) {
                    fields.push(field.clone());
                }
            }
            parent = definition.extends.as_deref();
        }
        fields
    }

    fn element_type_of(&self, ty: &TypeRef) -> Option<TypeRef> {
        ty.element().cloned()
    }

    fn primitive_default(&self, name: &str) -> Option<ObjectValue> {
        defaults::primitive_default(name)
    }
}
