//! Order-preserving deduplication under canonical equality.

use std::collections::HashSet;

use super::normalize::canonical_key;

/// Drops later items whose URL is canonically equal to an earlier one.
pub fn dedupe<T, I>(items: I) -> Vec<T>
where
    T: AsRef<str>,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(canonical_key(item.as_ref())))
        .collect()
}
