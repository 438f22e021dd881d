//! Membership tests over plain sequences.

use std::cmp::Ordering;

/// Check every item in turn.
pub fn linear_contains<I>(items: I, key: &I::Item) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    items.into_iter().any(|item| &item == key)
}

/// Halve the search space each step. `items` must already be sorted.
pub fn binary_contains<T>(items: &[T], key: &T) -> bool
where
    T: Ord,
{
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(key) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return true,
        }
    }
    false
}
