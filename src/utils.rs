use jsonskel_skeleton::{SkeletonError, TypeRegistry};
use std::fs::read_to_string;
use std::path::Path;

pub fn load_model(path: &Path) -> Result<TypeRegistry, SkeletonError> {
    let contents = read_to_string(path).map_err(|e| {
        SkeletonError::Model(format!("Failed to read {} - {e}", path_to_string(path)))
    })?;
    TypeRegistry::from_json(&contents)
}

pub fn path_to_string(path: &Path) -> String {
    match path.to_str() {
        None => format!("Invalid Path {path:?}"),
        Some(s) => s.to_string(),
    }
}
