//! Ordered pattern matching over an outcome.
//!
//! Patterns are explicit tagged values built by dedicated constructor
//! functions ([`Pattern::success`], [`Pattern::guarded`],
//! [`Pattern::fields`], [`Pattern::failure`]) and evaluated strictly in
//! slice order by [`Outcome::match_with`]. The first applicable pattern
//! wins and its handler receives the owned value; later patterns are never
//! consulted.
//!
//! [`Outcome::match_simple`] is the non-ordered alternative: one optional
//! handler per variant, no panics.
//!
//! ```rust
//! use millrace::{success, Pattern};
//!
//! let label = success::<i32, String>(17).match_with(vec![
//!     Pattern::guarded(|n: &i32| *n < 0, |n| format!("negative {n}")),
//!     Pattern::guarded(|n: &i32| *n < 100, |n| format!("small {n}")),
//!     Pattern::success(|n| format!("large {n}")),
//!     Pattern::failure(|e: String| format!("failed {e}")),
//! ]);
//! assert_eq!(label, "small 17");
//! ```

use serde_json::{Map, Value};

use crate::outcome::Outcome;

/// Shallow field access for destructuring patterns.
///
/// A `fields` pattern compares each expected key against the value this
/// trait exposes; equality is shallow `==` on the field values, never a
/// deep structural walk.
pub trait FieldView {
    /// The field stored under `key`, if present.
    fn field(&self, key: &str) -> Option<&Value>;
}

impl FieldView for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl FieldView for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// How a success pattern decides applicability.
pub enum SuccessKind<'a, T> {
    /// Always applicable; the catch-all for success values.
    Any,
    /// Applicable iff the guard returns true.
    Guarded(Box<dyn Fn(&T) -> bool + 'a>),
    /// Applicable iff every expected key matches shallowly; the probe is
    /// built once from the expected object at construction.
    Fields(Box<dyn Fn(&T) -> bool + 'a>),
}

/// One pattern consumed by [`Outcome::match_with`].
pub enum Pattern<'a, T, E, R> {
    /// Considered only for a `Success` receiver.
    Success {
        kind: SuccessKind<'a, T>,
        handler: Box<dyn FnOnce(T) -> R + 'a>,
    },
    /// Considered only for a `Failure` receiver.
    Failure {
        handler: Box<dyn FnOnce(E) -> R + 'a>,
    },
}

impl<'a, T, E, R> Pattern<'a, T, E, R> {
    /// A catch-all success pattern; always matches a `Success`.
    pub fn success<H>(handler: H) -> Self
    where
        H: FnOnce(T) -> R + 'a,
    {
        Pattern::Success {
            kind: SuccessKind::Any,
            handler: Box::new(handler),
        }
    }

    /// A guarded success pattern; matches iff `guard(&value)` is true.
    pub fn guarded<G, H>(guard: G, handler: H) -> Self
    where
        G: Fn(&T) -> bool + 'a,
        H: FnOnce(T) -> R + 'a,
    {
        Pattern::Success {
            kind: SuccessKind::Guarded(Box::new(guard)),
            handler: Box::new(handler),
        }
    }

    /// A destructuring success pattern; matches iff every key of
    /// `expected` is present on the value with a shallowly equal field.
    pub fn fields<H>(expected: Map<String, Value>, handler: H) -> Self
    where
        T: FieldView,
        H: FnOnce(T) -> R + 'a,
    {
        Pattern::Success {
            kind: SuccessKind::Fields(Box::new(move |value: &T| {
                expected
                    .iter()
                    .all(|(key, want)| value.field(key) == Some(want))
            })),
            handler: Box::new(handler),
        }
    }

    /// A failure pattern; matches any `Failure`.
    pub fn failure<H>(handler: H) -> Self
    where
        H: FnOnce(E) -> R + 'a,
    {
        Pattern::Failure {
            handler: Box::new(handler),
        }
    }
}

/// Per-variant handlers for [`Outcome::match_simple`]; either may be
/// omitted.
pub struct SimpleArms<'a, T, E, R> {
    on_success: Option<Box<dyn FnOnce(T) -> R + 'a>>,
    on_failure: Option<Box<dyn FnOnce(E) -> R + 'a>>,
}

impl<'a, T, E, R> SimpleArms<'a, T, E, R> {
    /// No handlers; add them with `on_success`/`on_failure`.
    pub fn new() -> Self {
        SimpleArms {
            on_success: None,
            on_failure: None,
        }
    }

    /// Handler for the `Success` variant.
    pub fn on_success<H>(mut self, handler: H) -> Self
    where
        H: FnOnce(T) -> R + 'a,
    {
        self.on_success = Some(Box::new(handler));
        self
    }

    /// Handler for the `Failure` variant.
    pub fn on_failure<H>(mut self, handler: H) -> Self
    where
        H: FnOnce(E) -> R + 'a,
    {
        self.on_failure = Some(Box::new(handler));
        self
    }
}

impl<T, E, R> Default for SimpleArms<'_, T, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Outcome<T, E> {
    /// Scan `patterns` in order and run the first applicable handler.
    ///
    /// For a `Success`, failure patterns are skipped and the value flows
    /// into the winning handler; for a `Failure`, only failure patterns
    /// are considered.
    ///
    /// # Panics
    ///
    /// Panics with `No matching pattern found` (success receiver) or
    /// `No matching failure pattern found` (failure receiver) when the
    /// scan is exhausted. This is the one deliberately non-total corner of
    /// the matching surface; end a pattern list with
    /// [`Pattern::success`]/[`Pattern::failure`] catch-alls to rule it
    /// out.
    pub fn match_with<R>(self, patterns: Vec<Pattern<'_, T, E, R>>) -> R {
        match self {
            Outcome::Success(value) => {
                for pattern in patterns {
                    if let Pattern::Success { kind, handler } = pattern {
                        let applies = match &kind {
                            SuccessKind::Any => true,
                            SuccessKind::Guarded(probe) | SuccessKind::Fields(probe) => {
                                probe(&value)
                            }
                        };
                        if applies {
                            return handler(value);
                        }
                    }
                }
                panic!("No matching pattern found")
            }
            Outcome::Failure(error) => {
                for pattern in patterns {
                    if let Pattern::Failure { handler } = pattern {
                        return handler(error);
                    }
                }
                panic!("No matching failure pattern found")
            }
        }
    }

    /// Typed per-variant dispatch. The present handler for the taken
    /// variant runs and its result comes back in `Some`; an omitted
    /// handler yields `None`. Never panics.
    pub fn match_simple<R>(self, arms: SimpleArms<'_, T, E, R>) -> Option<R> {
        match self {
            Outcome::Success(value) => arms.on_success.map(|handler| handler(value)),
            Outcome::Failure(error) => arms.on_failure.map(|handler| handler(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use serde_json::json;
    use std::cell::Cell;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().expect("test fixture must be an object").clone()
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        let first_ran = Cell::new(false);
        let second_ran = Cell::new(false);

        success::<i32, String>(5).match_with(vec![
            Pattern::guarded(|n: &i32| *n > 0, |_| first_ran.set(true)),
            Pattern::guarded(|n: &i32| *n > 0, |_| second_ran.set(true)),
        ]);

        assert!(first_ran.get());
        assert!(!second_ran.get());
    }

    #[test]
    fn test_basic_pattern_is_catch_all() {
        let label = success::<i32, String>(-3).match_with(vec![
            Pattern::guarded(|n: &i32| *n > 0, |_| "positive"),
            Pattern::success(|_| "anything"),
        ]);
        assert_eq!(label, "anything");
    }

    #[test]
    fn test_failure_patterns_skipped_for_success() {
        let label = success::<i32, String>(1).match_with(vec![
            Pattern::failure(|_: String| "failed"),
            Pattern::success(|_| "ok"),
        ]);
        assert_eq!(label, "ok");
    }

    #[test]
    fn test_failure_receiver_considers_only_failure_patterns() {
        let label = failure::<i32, String>("boom".to_string()).match_with(vec![
            Pattern::success(|_| "ok".to_string()),
            Pattern::failure(|e: String| format!("failed: {e}")),
        ]);
        assert_eq!(label, "failed: boom");
    }

    #[test]
    fn test_fields_pattern_shallow_equality() {
        let event = json!({"kind": "push", "branch": "main", "commits": 3});

        let label = success::<Value, String>(event).match_with(vec![
            Pattern::fields(obj(json!({"kind": "push", "branch": "release"})), |_| {
                "release push"
            }),
            Pattern::fields(obj(json!({"kind": "push"})), |_| "push"),
            Pattern::success(|_| "other"),
        ]);
        assert_eq!(label, "push");
    }

    #[test]
    fn test_fields_pattern_null_value_matches() {
        let event = json!({"assignee": null, "open": true});
        let label = success::<Value, String>(event).match_with(vec![
            Pattern::fields(obj(json!({"assignee": null})), |_| "unassigned"),
            Pattern::success(|_| "assigned"),
        ]);
        assert_eq!(label, "unassigned");
    }

    #[test]
    fn test_fields_pattern_missing_key_does_not_match() {
        let event = json!({"open": true});
        let label = success::<Value, String>(event).match_with(vec![
            Pattern::fields(obj(json!({"assignee": null})), |_| "unassigned"),
            Pattern::success(|_| "fallthrough"),
        ]);
        assert_eq!(label, "fallthrough");
    }

    #[test]
    #[should_panic(expected = "No matching pattern found")]
    fn test_no_success_pattern_panics() {
        success::<i32, String>(1).match_with(vec![
            Pattern::guarded(|n: &i32| *n > 10, |_| "big"),
            Pattern::failure(|_: String| "failed"),
        ]);
    }

    #[test]
    #[should_panic(expected = "No matching failure pattern found")]
    fn test_no_failure_pattern_panics() {
        failure::<i32, String>("e".to_string())
            .match_with(vec![Pattern::success(|_| "ok")]);
    }

    #[test]
    fn test_match_simple_dispatches_by_variant() {
        let got = success::<i32, String>(2).match_simple(
            SimpleArms::new()
                .on_success(|n| n * 10)
                .on_failure(|_| -1),
        );
        assert_eq!(got, Some(20));

        let got = failure::<i32, String>("x".to_string()).match_simple(
            SimpleArms::new()
                .on_success(|n| n * 10)
                .on_failure(|_| -1),
        );
        assert_eq!(got, Some(-1));
    }

    #[test]
    fn test_match_simple_omitted_handler_is_skipped() {
        let got: Option<i32> = failure::<i32, String>("x".to_string())
            .match_simple(SimpleArms::new().on_success(|n| n));
        assert_eq!(got, None);
    }
}
