use crate::TypeResolver;
use itertools::Itertools;
use jsonskel_core::{
    defaults, CompositeType, IndexSet, JsonObject, ObjectValue, SkeletonError, TypeRef,
};
use log::{debug, trace, warn};

/// Key the documentation sub-object is attached under.
pub const COMMENT_KEY: &str = "@comment";

#[derive(Clone, Debug, PartialEq)]
pub struct SkeletonOptions {
    pub comment_key: String,
    pub include_comments: bool,
    /// Maximum number of composite types expanded along one path.
    pub max_depth: usize,
}

impl Default for SkeletonOptions {
    fn default() -> Self {
        SkeletonOptions {
            comment_key: COMMENT_KEY.to_string(),
            include_comments: true,
            max_depth: 64,
        }
    }
}

/// A built skeleton together with the field level problems hit while building it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    pub value: JsonObject,
    pub diagnostics: Vec<SkeletonError>,
}

impl Skeleton {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[inline]
    pub fn to_json_text(&self, pretty: bool) -> Result<String, SkeletonError> {
        self.value.to_json_text(pretty)
    }
}

/// State of one top level build: the types currently being expanded and the
/// field path used to label diagnostics.
#[derive(Default)]
struct Expansion {
    in_progress: IndexSet<String>,
    path: Vec<String>,
    diagnostics: Vec<SkeletonError>,
}

impl Expansion {
    fn field(&self) -> String {
        self.path.iter().join(".")
    }

    fn unresolved(&self, ty: &TypeRef) -> SkeletonError {
        SkeletonError::unresolved(self.field(), ty)
    }

    fn report(&mut self, error: SkeletonError) {
        warn!("{error}");
        self.diagnostics.push(error);
    }
}

/// Generates sample instances of composite types.
///
/// Every field gets the default of its declared type: primitives and known scalars
/// map to zero values, arrays and lists become a one element list and composite
/// references are expanded recursively. A type that is already being expanded on the
/// current path becomes `{}`, unresolvable fields become `null`. Both are recorded as
/// diagnostics and never abort sibling fields.
#[derive(Debug)]
pub struct SkeletonBuilder<'r, R: TypeResolver + ?Sized> {
    resolver: &'r R,
    options: SkeletonOptions,
}

impl<'r, R: TypeResolver + ?Sized> SkeletonBuilder<'r, R> {
    pub fn new(resolver: &'r R) -> Self {
        Self::with_options(resolver, SkeletonOptions::default())
    }

    pub fn with_options(resolver: &'r R, options: SkeletonOptions) -> Self {
        SkeletonBuilder { resolver, options }
    }

    #[inline]
    pub fn options(&self) -> &SkeletonOptions {
        &self.options
    }

    /// Skeleton of `ty`, empty when `ty` does not resolve to a composite type.
    pub fn build(&self, ty: &TypeRef) -> JsonObject {
        self.generate(ty).value
    }

    pub fn build_composite(&self, composite: &CompositeType) -> JsonObject {
        self.generate_composite(composite).value
    }

    pub fn generate(&self, ty: &TypeRef) -> Skeleton {
        let ty = self.resolver.classify(ty);
        match self.resolver.resolve(&ty) {
            Some(composite) => self.generate_composite(composite),
            None => {
                debug!("{ty} is not a composite type, skeleton is empty");
                Skeleton::default()
            }
        }
    }

    pub fn generate_composite(&self, composite: &CompositeType) -> Skeleton {
        let mut expansion = Expansion::default();
        expansion.path.push(composite.name.clone());
        let value = self.expand(composite, &mut expansion);
        Skeleton {
            value,
            diagnostics: expansion.diagnostics,
        }
    }

    fn expand(&self, composite: &CompositeType, expansion: &mut Expansion) -> JsonObject {
        if expansion.in_progress.len() >= self.options.max_depth
            || !expansion.in_progress.insert(composite.name.clone())
        {
            let error = SkeletonError::recursion(expansion.field(), &composite.name);
            expansion.report(error);
            return JsonObject::new();
        }
        debug!("expanding {}", composite.name);

        let mut object = JsonObject::new();
        let mut comments = JsonObject::new();
        for field in self.resolver.fields_of(composite) {
            expansion.path.push(field.name.clone());
            if let Some(doc) = field.documentation() {
                comments.set(field.name.as_str(), doc);
            }
            let value = match self.field_value(&field.ty, expansion) {
                Ok(value) => value,
                Err(error) => {
                    expansion.report(error);
                    ObjectValue::null()
                }
            };
            trace!("{} = {value}", expansion.field());
            object.set(field.name, value);
            expansion.path.pop();
        }

        if self.options.include_comments && !comments.is_empty() {
            let key = self.options.comment_key.as_str();
            if object.contains_key(key) {
                warn!("{}: field {key} is replaced by field documentation", composite.name);
            }
            object.set(key, comments);
        }

        expansion.in_progress.pop();
        object
    }

    fn field_value(
        &self,
        ty: &TypeRef,
        expansion: &mut Expansion,
    ) -> Result<ObjectValue, SkeletonError> {
        let ty = self.resolver.classify(ty);
        if let TypeRef::Primitive(name) = &ty {
            return self
                .resolver
                .primitive_default(name)
                .ok_or_else(|| expansion.unresolved(&ty));
        }
        if let Some(value) = defaults::lookup(&ty.presentable_name()) {
            return Ok(value);
        }

        match &ty {
            TypeRef::ArrayOf(_) => {
                let element = self.deepest_element(&ty);
                Ok(ObjectValue::List(vec![self.element_value(&element, expansion)?]))
            }
            // one level only, List<List<T>> is not unwrapped further
            TypeRef::ListOf(_) => {
                let element = self
                    .resolver
                    .element_type_of(&ty)
                    .map(|e| self.resolver.classify(&e))
                    .unwrap_or(TypeRef::Unresolved);
                Ok(ObjectValue::List(vec![self.element_value(&element, expansion)?]))
            }
            TypeRef::ClassReference(_) => self.nested(&ty, expansion),
            TypeRef::Primitive(_) | TypeRef::NamedScalar(_) | TypeRef::Unresolved => {
                Err(expansion.unresolved(&ty))
            }
        }
    }

    fn deepest_element(&self, ty: &TypeRef) -> TypeRef {
        let mut current = ty.clone();
        while let TypeRef::ArrayOf(_) = current {
            current = match self.resolver.element_type_of(&current) {
                Some(element) => self.resolver.classify(&element),
                None => return TypeRef::Unresolved,
            };
        }
        current
    }

    /// Single element of an array or list skeleton.
    ///
    /// Elements that are themselves lists, like `List<List<Role>>` or `List<Role>[]`,
    /// are not expanded: the field becomes `null` with an unresolved diagnostic.
    fn element_value(
        &self,
        element: &TypeRef,
        expansion: &mut Expansion,
    ) -> Result<ObjectValue, SkeletonError> {
        match element {
            TypeRef::Primitive(name) => self
                .resolver
                .primitive_default(name)
                .ok_or_else(|| expansion.unresolved(element)),
            TypeRef::NamedScalar(name) => {
                defaults::lookup(name).ok_or_else(|| expansion.unresolved(element))
            }
            TypeRef::ClassReference(_) => self.nested(element, expansion),
            TypeRef::ArrayOf(_) | TypeRef::ListOf(_) | TypeRef::Unresolved => {
                Err(expansion.unresolved(element))
            }
        }
    }

    fn nested(&self, ty: &TypeRef, expansion: &mut Expansion) -> Result<ObjectValue, SkeletonError> {
        match self.resolver.resolve(ty) {
            Some(composite) => Ok(ObjectValue::Object(self.expand(composite, expansion))),
            None => Err(expansion.unresolved(ty)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRegistry;
    use jsonskel_core::json_object;
    use pretty_assertions::assert_eq;

    fn registry() -> TypeRegistry {
        TypeRegistry::from_iter([
            CompositeType::new("Point")
                .field("x", TypeRef::primitive("int"))
                .field("y", TypeRef::primitive("int")),
            CompositeType::new("Wrapper").field("self", TypeRef::class("Wrapper")),
        ])
    }

    #[test]
    fn expands_point() {
        let registry = registry();
        let builder = SkeletonBuilder::new(&registry);
        assert_eq!(
            builder.build(&TypeRef::class("Point")),
            json_object! { "x" => 0, "y" => 0 }
        );
    }

    #[test]
    fn guard_is_released_after_each_field() {
        let mut registry = registry();
        registry.register(
            CompositeType::new("Segment")
                .field("from", TypeRef::class("Point"))
                .field("to", TypeRef::class("Point")),
        );
        let skeleton = SkeletonBuilder::new(&registry).generate(&TypeRef::class("Segment"));
        let point = json_object! { "x" => 0, "y" => 0 };
        assert_eq!(skeleton.value, json_object! { "from" => point.clone(), "to" => point });
        assert!(skeleton.is_complete());
    }

    #[test]
    fn self_reference_is_labelled_with_its_field() {
        let registry = registry();
        let skeleton = SkeletonBuilder::new(&registry).generate(&TypeRef::class("Wrapper"));
        assert_eq!(skeleton.value, json_object! { "self" => JsonObject::new() });
        assert_eq!(
            skeleton.diagnostics,
            vec![SkeletonError::recursion("Wrapper.self", "Wrapper")]
        );
    }

    #[test]
    fn list_elements_are_not_unwrapped_twice() {
        let mut registry = registry();
        registry.register(
            CompositeType::new("Grids")
                .field("rows", "List<Point>[]".parse().unwrap())
                .field("cells", "List<List<Point>>".parse().unwrap()),
        );
        let skeleton = SkeletonBuilder::new(&registry).generate(&TypeRef::class("Grids"));
        assert_eq!(
            skeleton.value,
            json_object! { "rows" => ObjectValue::null(), "cells" => ObjectValue::null() }
        );
        assert_eq!(
            skeleton.diagnostics,
            vec![
                SkeletonError::unresolved("Grids.rows", "List<Point>"),
                SkeletonError::unresolved("Grids.cells", "List<Point>"),
            ]
        );
    }

    #[test]
    fn zero_depth_builds_nothing() {
        let registry = registry();
        let options = SkeletonOptions {
            max_depth: 0,
            ..Default::default()
        };
        let skeleton =
            SkeletonBuilder::with_options(&registry, options).generate(&TypeRef::class("Point"));
        assert!(skeleton.value.is_empty());
        assert_eq!(skeleton.diagnostics.len(), 1);
        assert!(skeleton.diagnostics[0].is_recursion());
    }
}
