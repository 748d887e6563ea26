mod builder;
mod registry;
mod resolver;

pub use builder::{Skeleton, SkeletonBuilder, SkeletonOptions, COMMENT_KEY};
pub use jsonskel_core::*;
pub use registry::TypeRegistry;
pub use resolver::TypeResolver;

/// Builds the skeleton of `ty` with default options.
pub fn build<R: TypeResolver + ?Sized>(resolver: &R, ty: &TypeRef) -> JsonObject {
    SkeletonBuilder::new(resolver).build(ty)
}
