pub mod defaults;
mod macros;
mod number;
mod object;
mod primitive;
mod types;

pub type IndexMap<K, V> = indexmap::map::IndexMap<K, V, FxBuildHasher>;
pub type IndexSet<V> = indexmap::set::IndexSet<V, FxBuildHasher>;

use fxhash::FxBuildHasher;
pub use number::*;
pub use object::*;
pub use primitive::*;
pub use types::*;
