use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkeletonError {
    /// A field's type could not be resolved to a composite definition or a default.
    UnresolvedType { field: String, type_name: String },
    /// A type reappeared on its own expansion path, or the depth bound was hit.
    UnboundedRecursion { field: String, type_name: String },
    InvalidTypeName(String),
    Model(String),
    Render(String),
}

impl Error for SkeletonError {}

impl Display for SkeletonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SkeletonError::UnresolvedType { field, type_name } => {
                write!(f, "Unresolved Type: {field} has type {type_name}")
            }
            SkeletonError::UnboundedRecursion { field, type_name } => {
                write!(f, "Unbounded Recursion: {field} expands {type_name} again")
            }
            SkeletonError::InvalidTypeName(m) => write!(f, "Invalid Type Name: {m}"),
            SkeletonError::Model(m) => write!(f, "Model Error: {m}"),
            SkeletonError::Render(m) => write!(f, "Render Error: {m}"),
        }
    }
}

impl From<serde_json::Error> for SkeletonError {
    #[inline]
    fn from(value: serde_json::Error) -> Self {
        SkeletonError::Render(value.to_string())
    }
}

impl SkeletonError {
    pub fn unresolved<F: Display, T: Display>(field: F, type_name: T) -> Self {
        SkeletonError::UnresolvedType {
            field: field.to_string(),
            type_name: type_name.to_string(),
        }
    }

    pub fn recursion<F: Display, T: Display>(field: F, type_name: T) -> Self {
        SkeletonError::UnboundedRecursion {
            field: field.to_string(),
            type_name: type_name.to_string(),
        }
    }

    #[inline]
    pub fn is_recursion(&self) -> bool {
        matches!(self, SkeletonError::UnboundedRecursion { .. })
    }
}
