//! Fail-fast operators over slices.

use crate::outcome::Outcome;

/// Apply `f` to each element in order, collecting the successes. The first
/// failure stops iteration immediately and becomes the result; later
/// elements are never visited.
pub fn map<T, U, E, F>(items: &[T], mut f: F) -> Outcome<Vec<U>, E>
where
    F: FnMut(&T) -> Outcome<U, E>,
{
    let mut collected = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match f(item) {
            Outcome::Success(value) => collected.push(value),
            Outcome::Failure(error) => {
                log::trace!("array map short-circuited at index {index}");
                return Outcome::Failure(error);
            }
        }
    }
    Outcome::Success(collected)
}

/// Keep the elements whose predicate succeeds with `true`; a predicate
/// failure stops iteration and becomes the result.
pub fn filter<T, E, F>(items: &[T], mut pred: F) -> Outcome<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Outcome<bool, E>,
{
    let mut kept = Vec::new();
    for item in items {
        match pred(item) {
            Outcome::Success(true) => kept.push(item.clone()),
            Outcome::Success(false) => {}
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(kept)
}

/// Fold left with a fallible step; the first failing step becomes the
/// result and the remaining elements are never visited.
pub fn reduce<T, B, E, F>(items: &[T], init: B, mut f: F) -> Outcome<B, E>
where
    F: FnMut(B, &T) -> Outcome<B, E>,
{
    let mut acc = init;
    for item in items {
        match f(acc, item) {
            Outcome::Success(next) => acc = next,
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(acc)
}

/// The first element, or `failure(on_empty())` for an empty slice. O(1).
pub fn head<T, E, F>(items: &[T], on_empty: F) -> Outcome<T, E>
where
    T: Clone,
    F: FnOnce() -> E,
{
    match items.first() {
        Some(first) => Outcome::Success(first.clone()),
        None => Outcome::Failure(on_empty()),
    }
}

/// Everything but the first element; an empty slice stays empty. The
/// source is never mutated.
pub fn tail<T>(items: &[T]) -> Vec<T>
where
    T: Clone,
{
    items.get(1..).map(<[T]>::to_vec).unwrap_or_default()
}

/// The element at `index`, or `failure(on_missing(index))` when out of
/// bounds. O(1).
pub fn get<T, E, F>(items: &[T], index: usize, on_missing: F) -> Outcome<T, E>
where
    T: Clone,
    F: FnOnce(usize) -> E,
{
    match items.get(index) {
        Some(item) => Outcome::Success(item.clone()),
        None => Outcome::Failure(on_missing(index)),
    }
}

/// True iff the slice has no elements.
pub fn is_empty<T>(items: &[T]) -> bool {
    items.is_empty()
}

/// The number of elements.
pub fn length<T>(items: &[T]) -> usize {
    items.len()
}
