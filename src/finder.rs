//! Second-largest distinct value of a sequence.
//!
//! The search is a single pass that tracks the two largest distinct values
//! seen so far. Duplicates are dropped on sight through a seen set, so the
//! result does not depend on input order or on how often a value repeats.
//!
//! ```rust
//! use secondmax::finder::{find, second_largest_unique};
//!
//! assert_eq!(second_largest_unique([5, 3, 9, 9, 2]), Some(5));
//! assert_eq!(find(&[3, 3, 3]), -1);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Returned by [`find`] when fewer than two distinct values exist.
///
/// A genuine second-largest value of `-1` prints the same way. Callers that
/// need to tell the two apart should use [`second_largest_unique`].
pub const NOT_FOUND: i64 = -1;

/// Running top-two tracker over distinct values.
///
/// `first` and `second` are distinct values from the input with
/// `first >= second`. Only distinct values are tracked, so the ordering is
/// strict (`first > second`) whenever both are present.
#[derive(Debug, Clone)]
pub struct TopTwo<T> {
    first: Option<T>,
    second: Option<T>,
    seen: HashSet<T>,
}

impl<T> Default for TopTwo<T> {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
            seen: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + Hash + Ord> TopTwo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one value. Values already observed are ignored.
    pub fn observe(&mut self, value: T) {
        if !self.seen.insert(value) {
            return;
        }

        match self.first {
            Some(first) if value <= first => {
                if value != first && self.second.is_none_or(|second| value > second) {
                    self.second = Some(value);
                }
            }
            _ => {
                self.second = self.first;
                self.first = Some(value);
            }
        }
    }

    pub fn first(&self) -> Option<T> {
        self.first
    }

    pub fn second(&self) -> Option<T> {
        self.second
    }

    /// Number of distinct values observed so far.
    pub fn distinct_count(&self) -> usize {
        self.seen.len()
    }
}

impl<T: Copy + Eq + Hash + Ord> Extend<T> for TopTwo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

impl<T: Copy + Eq + Hash + Ord> FromIterator<T> for TopTwo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut top = Self::new();
        top.extend(iter);
        top
    }
}

/// Second-largest value among the distinct elements of `items`, or `None`
/// when there are fewer than two distinct elements.
pub fn second_largest_unique<T, I>(items: I) -> Option<T>
where
    T: Copy + Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<TopTwo<T>>().second()
}

/// Sentinel form of [`second_largest_unique`]: yields [`NOT_FOUND`] instead of `None`.
pub fn find(nums: &[i64]) -> i64 {
    second_largest_unique(nums.iter().copied()).unwrap_or(NOT_FOUND)
}
