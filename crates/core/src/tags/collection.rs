//! Cache Tag Set
//!
//! A sorted, deduplicated set of [`CacheTag`]s supporting cheap union and
//! intersection tests.

use std::{
    cmp::Ordering,
    ops::{BitOr, BitOrAssign},
};

use smallvec::SmallVec;

use super::CacheTag;

/// A set of cache tags, kept sorted so membership and intersection are
/// logarithmic and linear respectively.
///
/// Inserting a tag that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheTagSet {
    tags: SmallVec<[CacheTag; 8]>,
}

impl CacheTagSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning `false` if it was already present.
    pub fn insert(&mut self, tag: CacheTag) -> bool {
        match self.tags.binary_search(&tag) {
            Ok(_) => false,
            Err(position) => {
                self.tags.insert(position, tag);

                true
            }
        }
    }

    /// Remove a tag, returning `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.position(tag) {
            Some(position) => {
                self.tags.remove(position);

                true
            }
            None => false,
        }
    }

    /// Check if this set contains a specific tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.position(tag).is_some()
    }

    /// Check if this set shares at least one tag with another.
    pub fn intersects(&self, other: &Self) -> bool {
        // Use two pointers approach on sorted vectors for O(n + m) performance.
        let mut left = self.tags.iter();
        let mut right = other.tags.iter();
        let mut left_tag = left.next();
        let mut right_tag = right.next();

        while let (Some(left_tag_ref), Some(right_tag_ref)) = (left_tag, right_tag) {
            match left_tag_ref.cmp(right_tag_ref) {
                Ordering::Equal => return true,
                Ordering::Less => left_tag = left.next(),
                Ordering::Greater => right_tag = right.next(),
            }
        }

        false
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate the tags in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, CacheTag> {
        self.tags.iter()
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.tags
            .binary_search_by(|candidate| candidate.as_str().cmp(tag))
            .ok()
    }
}

impl FromIterator<CacheTag> for CacheTagSet {
    fn from_iter<I: IntoIterator<Item = CacheTag>>(iter: I) -> Self {
        let mut tags: SmallVec<[CacheTag; 8]> = iter.into_iter().collect();

        tags.sort();
        tags.dedup();

        Self { tags }
    }
}

impl Extend<CacheTag> for CacheTagSet {
    fn extend<I: IntoIterator<Item = CacheTag>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<'a> IntoIterator for &'a CacheTagSet {
    type Item = &'a CacheTag;
    type IntoIter = std::slice::Iter<'a, CacheTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CacheTagSet {
    type Item = CacheTag;
    type IntoIter = smallvec::IntoIter<[CacheTag; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl BitOr for CacheTagSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        let capacity = self.tags.len().saturating_add(rhs.tags.len());
        let mut result = SmallVec::with_capacity(capacity);
        let mut left = self.tags.into_iter().peekable();
        let mut right = rhs.tags.into_iter().peekable();

        // Merge two sorted vectors (union).
        while let (Some(left_tag), Some(right_tag)) = (left.peek(), right.peek()) {
            match left_tag.cmp(right_tag) {
                Ordering::Less => result.extend(left.next()),
                Ordering::Greater => result.extend(right.next()),
                Ordering::Equal => {
                    result.extend(left.next());
                    right.next();
                }
            }
        }

        result.extend(left);
        result.extend(right);

        Self { tags: result }
    }
}

impl BitOrAssign for CacheTagSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = std::mem::take(self) | rhs;
    }
}
