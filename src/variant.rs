//! The deduplicated string collection passed between generation stages.
//!
//! Every stage of the generator consumes and produces a [`VariantSet`].
//! Membership is the only thing that carries meaning; iteration order is
//! unspecified. Use [`VariantSet::into_sorted_vec`] when a stable
//! presentation order is wanted.

use std::collections::HashSet;
use std::collections::hash_set;

use ahash::RandomState;

/// Backing hash set type, also the collection target for parallel merges.
pub type VariantHashSet = HashSet<String, RandomState>;

/// A set of unique password candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSet {
    inner: VariantHashSet,
}

impl VariantSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        VariantSet {
            inner: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Create a set holding a single member.
    pub fn singleton<S: Into<String>>(value: S) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(value);
        set
    }

    /// Insert a member, returning `true` if it was not present yet.
    pub fn insert<S: Into<String>>(&mut self, value: S) -> bool {
        self.inner.insert(value.into())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.inner.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.inner.iter()
    }

    /// Merge every member of `other` into this set.
    pub fn union_with(&mut self, other: VariantSet) {
        if self.inner.len() < other.inner.len() {
            let mut larger = other.inner;
            larger.extend(self.inner.drain());
            self.inner = larger;
        } else {
            self.inner.extend(other.inner);
        }
    }

    /// Borrow the underlying hash set (used by rayon fan-out).
    pub fn as_hash_set(&self) -> &VariantHashSet {
        &self.inner
    }

    /// Consume the set, returning its members in lexicographic order.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut members: Vec<String> = self.inner.into_iter().collect();
        members.sort_unstable();
        members
    }

    /// Consume the set, returning its members in unspecified order.
    pub fn into_vec(self) -> Vec<String> {
        self.inner.into_iter().collect()
    }
}

impl From<VariantHashSet> for VariantSet {
    fn from(inner: VariantHashSet) -> Self {
        VariantSet { inner }
    }
}

impl FromIterator<String> for VariantSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut inner = VariantHashSet::default();
        inner.extend(iter);
        VariantSet { inner }
    }
}

impl<'a> FromIterator<&'a str> for VariantSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl Extend<String> for VariantSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
