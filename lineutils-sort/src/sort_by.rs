// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;

/// Sort `items` ascending by the key `iteratee` derives from each element.
///
/// # Arguments
///
/// * `items` - The sequence to sort; it is not modified
/// * `iteratee` - Derives the comparison key; called exactly once per element
///
/// Keys compare with their natural `PartialOrd` ordering. The sort is stable.
/// A key that is not comparable with itself is treated as equal to every other
/// such key and placed after all comparable keys.
///
/// # Examples
///
/// ```rust
/// use lineutils_sort::sort_by;
///
/// let readings = [2.5, f64::NAN, -1.0, 0.0];
/// let sorted = sort_by(&readings, |r| *r);
///
/// assert_eq!(&sorted[..3], &[-1.0, 0.0, 2.5]);
/// assert!(sorted[3].is_nan());
/// ```
pub fn sort_by<T, K, F>(items: &[T], mut iteratee: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keyed = items.iter().map(|item| (iteratee(item), item)).collect();
    order_by_key(keyed)
}

/// Fallible variant of [`sort_by`].
///
/// # Errors
///
/// Returns the first error produced by `iteratee`. No output is produced in
/// that case and later elements are not visited.
///
/// # Examples
///
/// ```rust
/// use lineutils_sort::try_sort_by;
///
/// let raw = ["3", "1", "two"];
/// let parsed = try_sort_by(&raw, |s| s.parse::<u32>());
///
/// assert!(parsed.is_err());
/// ```
pub fn try_sort_by<T, K, E, F>(items: &[T], mut iteratee: F) -> Result<Vec<T>, E>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> Result<K, E>,
{
    let keyed = items
        .iter()
        .map(|item| iteratee(item).map(|key| (key, item)))
        .collect::<Result<Vec<_>, E>>()?;
    Ok(order_by_key(keyed))
}

fn order_by_key<T, K>(keyed: Vec<(K, &T)>) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
{
    let (mut comparable, incomparable): (Vec<_>, Vec<_>) =
        keyed.into_iter().partition(|(key, _)| is_comparable(key));

    // Vec::sort_by is stable
    comparable.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    comparable
        .into_iter()
        .chain(incomparable)
        .map(|(_, item)| item.clone())
        .collect()
}

fn is_comparable<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}
