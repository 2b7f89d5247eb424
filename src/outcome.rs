//! The two-variant outcome type and its core combinators.
//!
//! `Outcome<T, E>` is the crate's central sum type: a computation either
//! produced a value (`Success`) or an error (`Failure`). Combinators return
//! freshly constructed values and never mutate their receiver, so failures
//! compose through ordinary function chaining instead of unwinding.
//!
//! # Example
//!
//! ```rust
//! use millrace::{success, failure, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => success(port),
//!         Err(_) => failure(format!("not a port: {raw}")),
//!     }
//! }
//!
//! let banner = parse_port("8080")
//!     .map(|port| format!("listening on {port}"))
//!     .get_or_else_with(|err| format!("refusing to start: {err}"));
//! assert_eq!(banner, "listening on 8080");
//! ```
//!
//! # Exit points
//!
//! A caller leaves outcome-space through exactly one of `fold`,
//! `get_or_else`/`get_or_else_with`, `into_pair`, `into_result`, or the
//! panicking `unwrap`. Everything else produces another `Outcome`.

use std::fmt;

/// A computation result: either a `Success` holding the value or a
/// `Failure` holding the error. Always exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

/// Construct a successful outcome.
///
/// Accepts any value without validation.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Construct a failed outcome.
///
/// Accepts any error value without validation.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// True iff this is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True iff this is a `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Transform the success value. A `Failure` passes through unchanged
    /// and `f` is never invoked.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Monadic bind: on `Success` the outcome is whatever `f` returns; a
    /// `Failure` short-circuits unchanged.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error value; the dual of [`map`](Self::map).
    pub fn map_failure<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Convert a `Failure` into a `Success` by applying `f` to the error.
    /// A `Success` passes through unchanged.
    pub fn recover<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Success(f(error)),
        }
    }

    /// Fallible recovery: on `Failure` the outcome is whatever `f` returns
    /// (the error type may change); a `Success` passes through.
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Observe the success value for effect (logging, metrics) without
    /// consuming it.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Observe the error for effect without consuming it.
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(ref error) = self {
            f(error);
        }
        self
    }

    /// Eliminator: exactly one branch runs, returning a plain value.
    ///
    /// The failure branch comes first, matching the convention that the
    /// error path is the one callers are forced to think about.
    pub fn fold<R, FF, FS>(self, on_failure: FF, on_success: FS) -> R
    where
        FF: FnOnce(E) -> R,
        FS: FnOnce(T) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// The success value, or `default`. Never panics.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// The success value, or the result of applying `f` to the error.
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Positional destructure: `Success(v)` becomes `(Some(v), None)` and
    /// `Failure(e)` becomes `(None, Some(e))`.
    ///
    /// ```rust
    /// use millrace::failure;
    ///
    /// let (value, err) = failure::<i32, &str>("boom").into_pair();
    /// assert_eq!(value, None);
    /// assert_eq!(err, Some("boom"));
    /// ```
    pub fn into_pair(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Success(value) => (Some(value), None),
            Outcome::Failure(error) => (None, Some(error)),
        }
    }

    /// Lossless conversion into `std::result::Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// The success value, or a panic carrying the error's display form.
    ///
    /// This is the one deliberately partial accessor; callers that cannot
    /// tolerate a panic check [`is_failure`](Self::is_failure) first or use
    /// [`get_or_else`](Self::get_or_else).
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("{error}"),
        }
    }

    /// Bridge into `anyhow::Result` at crate boundaries.
    pub fn into_anyhow(self) -> anyhow::Result<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(anyhow::anyhow!("{error}")),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}
