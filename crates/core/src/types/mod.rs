use crate::{defaults, SkeletonError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "short", "char", "int", "long", "float", "double",
];

/// Deepest array or generic nesting a type name may have.
pub const MAX_TYPE_NESTING: usize = 256;

/// Single parameter generic containers that expand to a one element list.
pub const LIST_CONTAINERS: [&str; 9] = [
    "List",
    "ArrayList",
    "LinkedList",
    "Collection",
    "Iterable",
    "Set",
    "HashSet",
    "LinkedHashSet",
    "TreeSet",
];

#[derive(Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum TypeRef {
    Primitive(String),
    NamedScalar(String),
    ArrayOf(Box<TypeRef>),
    ListOf(Box<TypeRef>),
    ClassReference(String),
    Unresolved,
}

impl TypeRef {
    #[inline]
    pub fn primitive<S: Into<String>>(name: S) -> Self {
        TypeRef::Primitive(name.into())
    }

    #[inline]
    pub fn scalar<S: Into<String>>(name: S) -> Self {
        TypeRef::NamedScalar(name.into())
    }

    #[inline]
    pub fn class<S: Into<String>>(id: S) -> Self {
        TypeRef::ClassReference(id.into())
    }

    #[inline]
    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::ArrayOf(Box::new(element))
    }

    #[inline]
    pub fn list_of(element: TypeRef) -> Self {
        TypeRef::ListOf(Box::new(element))
    }

    /// Element type of an array or list, `None` for everything else.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::ArrayOf(e) | TypeRef::ListOf(e) => Some(e),
            _ => None,
        }
    }

    /// Innermost element of nested arrays, `int[][]` gives `int`. Lists are not unwrapped.
    pub fn deepest_element(&self) -> &TypeRef {
        let mut current = self;
        while let TypeRef::ArrayOf(e) = current {
            current = e;
        }
        current
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    #[inline]
    pub fn class_id(&self) -> Option<&str> {
        match self {
            TypeRef::ClassReference(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn presentable_name(&self) -> String {
        self.to_string()
    }
}

/// Splits generic arguments on commas that are not nested inside another `<>`.
fn split_arguments(args: &str) -> Result<Vec<&str>, SkeletonError> {
    let mut depth = 0usize;
    let mut start = 0;
    let mut parts = Vec::new();
    for (index, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    SkeletonError::InvalidTypeName(format!("unbalanced '>' in <{args}>"))
                })?
            }
            ',' if depth == 0 => {
                parts.push(args[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(SkeletonError::InvalidTypeName(format!(
            "unbalanced '<' in <{args}>"
        )));
    }
    parts.push(args[start..].trim());
    Ok(parts)
}

fn too_deep(s: &str) -> SkeletonError {
    SkeletonError::InvalidTypeName(format!(
        "{s} nests deeper than {MAX_TYPE_NESTING} levels"
    ))
}

fn parse_type(s: &str, depth: usize) -> Result<TypeRef, SkeletonError> {
    let s = s.trim();
    let s = s
        .strip_prefix("? extends ")
        .or_else(|| s.strip_prefix("? super "))
        .unwrap_or(s)
        .trim();
    if s.is_empty() || s == "?" {
        return Ok(TypeRef::Unresolved);
    }

    let mut element = s;
    let mut dimensions = 0;
    while let Some(inner) = element.strip_suffix("[]") {
        element = inner.trim_end();
        dimensions += 1;
        if depth + dimensions > MAX_TYPE_NESTING {
            return Err(too_deep(s));
        }
    }
    if dimensions > 0 {
        let mut type_ref = parse_type(element, depth + dimensions)?;
        for _ in 0..dimensions {
            type_ref = TypeRef::array_of(type_ref);
        }
        return Ok(type_ref);
    }

    if let Some(open) = s.find('<') {
        let depth = depth + 1;
        if depth > MAX_TYPE_NESTING {
            return Err(too_deep(s));
        }
        let Some(args) = s[open + 1..].strip_suffix('>') else {
            return Err(SkeletonError::InvalidTypeName(format!(
                "{s} does not end with '>'"
            )));
        };
        let container = s[..open].trim();
        let args = split_arguments(args)?;
        if args.iter().any(|a| a.is_empty()) {
            return Err(SkeletonError::InvalidTypeName(format!(
                "{s} has an empty type argument"
            )));
        }
        if args.len() == 1 && LIST_CONTAINERS.contains(&container) {
            return Ok(TypeRef::list_of(parse_type(args[0], depth)?));
        }
        for arg in args {
            parse_type(arg, depth)?;
        }
        return Ok(TypeRef::class(s));
    }

    if s.contains(['>', ',', ' ']) {
        return Err(SkeletonError::InvalidTypeName(s.to_string()));
    }

    let type_ref = if PRIMITIVES.contains(&s) {
        TypeRef::primitive(s)
    } else if defaults::is_scalar(s) {
        TypeRef::scalar(s)
    } else {
        TypeRef::class(s)
    };
    Ok(type_ref)
}

impl FromStr for TypeRef {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s, 0)
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Primitive(name) | TypeRef::NamedScalar(name) | TypeRef::ClassReference(name) => {
                write!(f, "{name}")
            }
            TypeRef::ArrayOf(e) => write!(f, "{e}[]"),
            TypeRef::ListOf(e) => write!(f, "List<{e}>"),
            TypeRef::Unresolved => write!(f, "?"),
        }
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl FieldDescriptor {
    pub fn new<S: Into<String>>(name: S, ty: TypeRef) -> Self {
        FieldDescriptor {
            name: name.into(),
            ty,
            doc: None,
        }
    }

    pub fn with_doc<S: Into<String>>(mut self, doc: S) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Documentation text, blank docs count as missing.
    pub fn documentation(&self) -> Option<&str> {
        self.doc.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// A class-like type, `fields` are in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl CompositeType {
    pub fn new<S: Into<String>>(name: S) -> Self {
        CompositeType {
            name: name.into(),
            extends: None,
            fields: vec![],
        }
    }

    pub fn extending<S: Into<String>>(mut self, parent: S) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn field<S: Into<String>>(mut self, name: S, ty: TypeRef) -> Self {
        self.fields.push(FieldDescriptor::new(name, ty));
        self
    }

    pub fn documented_field<S: Into<String>, D: Into<String>>(
        mut self,
        name: S,
        ty: TypeRef,
        doc: D,
    ) -> Self {
        self.fields.push(FieldDescriptor::new(name, ty).with_doc(doc));
        self
    }

    #[inline]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::class(self.name.clone())
    }
}
