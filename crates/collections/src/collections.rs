//! Collection aliases used across paneterm.
//!
//! Layout ids are small `Copy` keys, so the Fx hasher beats SipHash for the
//! uniqueness checks done on every mutation. Sessions live in an
//! insertion-ordered map so listing them is stable.

pub use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

/// Insertion-ordered hash map with FxHash.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Insertion-ordered hash set with FxHash.
pub type IndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

/// Create an empty [`IndexMap`] (the alias has no `new()` because of the
/// custom hasher).
pub fn index_map<K, V>() -> IndexMap<K, V> {
    IndexMap::with_hasher(FxBuildHasher)
}
