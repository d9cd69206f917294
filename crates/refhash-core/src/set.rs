//! An ordered set of identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::hash::Hash;

/// A set of [`Hash`] values, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashSet(BTreeSet<Hash>);

impl HashSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hash. Returns `false` if it was already present.
    pub fn insert(&mut self, hash: Hash) -> bool {
        self.0.insert(hash)
    }

    /// Remove a hash. Returns `false` if it was absent.
    pub fn remove(&mut self, hash: &Hash) -> bool {
        self.0.remove(hash)
    }

    pub fn contains(&self, hash: &Hash) -> bool {
        self.0.contains(hash)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Hash> + '_ {
        self.0.iter()
    }
}

impl FromIterator<Hash> for HashSet {
    fn from_iter<I: IntoIterator<Item = Hash>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Hash> for HashSet {
    fn extend<I: IntoIterator<Item = Hash>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for HashSet {
    type Item = Hash;
    type IntoIter = std::collections::btree_set::IntoIter<Hash>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HashSet {
    type Item = &'a Hash;
    type IntoIter = std::collections::btree_set::Iter<'a, Hash>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = HashSet::new();
        let a = Hash::of(b"a");

        assert!(set.is_empty());
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert!(set.contains(&a));
        assert_eq!(set.len(), 1);

        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert!(!set.contains(&a));
    }

    #[test]
    fn test_iterates_in_order() {
        let set: HashSet = [
            Hash::from_bytes([0x22; 20]),
            Hash::EMPTY,
            Hash::from_bytes([0x11; 20]),
        ]
        .into_iter()
        .collect();

        let ordered: Vec<_> = set.iter().copied().collect();
        assert_eq!(
            ordered,
            vec![
                Hash::EMPTY,
                Hash::from_bytes([0x11; 20]),
                Hash::from_bytes([0x22; 20]),
            ]
        );
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Hash::of(b"a");
        let b = Hash::of(b"b");
        let s1: HashSet = vec![a, b].into_iter().collect();
        let mut s2 = HashSet::new();
        s2.extend([b, a, b]);
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_serde_json() {
        let set: HashSet = [Hash::EMPTY].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"00000000000000000000000000000000\"]");
        let back: HashSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
