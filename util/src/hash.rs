//! Utilities for computing hashes.
use std::hash::{BuildHasher, BuildHasherDefault};

use zwohash::ZwoHasher;

/// The default [`BuildHasher`] used for hash tables keyed by variables and literals.
pub type DefaultBuildHasher = BuildHasherDefault<ZwoHasher>;

/// Computes the hash of a value using andgraph's default hasher.
#[inline]
pub fn hash_value<T: std::hash::Hash>(value: T) -> u64 {
    DefaultBuildHasher::default().hash_one(value)
}

/// Computes the hash of a reference using andgraph's default hasher.
///
/// This forwards to [`hash_value`]. Restricting the argument to be a reference is occasionally
/// useful for type inference or for avoiding warnings.
#[inline]
pub fn hash_ref<T: std::hash::Hash>(value: &T) -> u64 {
    hash_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(hash_value([3u32, 5]), hash_ref(&[3u32, 5]));
        assert_ne!(hash_value([3u32, 5]), hash_value([5u32, 3]));
    }
}
