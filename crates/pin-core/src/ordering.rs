//! Tag orderings
//!
//! The listing can be sorted by name or by use count, ascending or
//! descending. The two CLI switches select one of the four combinations.

use std::cmp::Ordering;

use crate::models::Tag;

/// What to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Tag name, lexicographic
    Name,
    /// Use count, numeric
    #[default]
    UseCount,
}

/// Which way to sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A total ordering over tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOrdering {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl TagOrdering {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Create an ordering from the `--alphabetical` and `--descending` flags
    pub fn from_flags(alphabetical: bool, descending: bool) -> Self {
        let key = if alphabetical {
            SortKey::Name
        } else {
            SortKey::UseCount
        };
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }

    /// Compare two tags under this ordering
    pub fn compare(&self, a: &Tag, b: &Tag) -> Ordering {
        let ord = match self.key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::UseCount => a.use_count.cmp(&b.use_count),
        };
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    /// Sort tags in place (stable)
    pub fn sort(&self, tags: &mut [Tag]) {
        tags.sort_by(|a, b| self.compare(a, b));
    }
}
