//! Conditional branching over a success value.
//!
//! `when(predicate)` evaluates the predicate against a `Success` value and
//! remembers the verdict; a `Failure` always carries a false verdict, which
//! is what makes `otherwise` its universal catch-all branch.
//!
//! ```rust
//! use millrace::{success, Otherwise};
//!
//! let out = success::<i32, String>(70)
//!     .when(|load| *load > 90)
//!     .then(|load| println!("shedding at {load}%"))
//!     .otherwise(|branch| {
//!         if let Otherwise::Rejected(load) = branch {
//!             println!("healthy at {load}%");
//!         }
//!     });
//! assert_eq!(out, success(70));
//! ```

use crate::outcome::Outcome;

/// Transient value produced by [`Outcome::when`]; consumed by `otherwise`.
#[derive(Debug)]
pub struct ConditionalChain<T, E> {
    outcome: Outcome<T, E>,
    verdict: bool,
}

/// The view handed to the `otherwise` callback: either a success value the
/// predicate rejected, or the error of a failed outcome.
#[derive(Debug)]
pub enum Otherwise<'a, T, E> {
    /// The outcome succeeded but the predicate returned false.
    Rejected(&'a T),
    /// The outcome failed; `otherwise` fires for every failure regardless
    /// of the predicate.
    Failed(&'a E),
}

impl<T, E> Outcome<T, E> {
    /// Start a conditional chain. The predicate sees only a `Success`
    /// value; a `Failure` yields a false verdict without invoking it.
    pub fn when<P>(self, predicate: P) -> ConditionalChain<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        let verdict = match &self {
            Outcome::Success(value) => predicate(value),
            Outcome::Failure(_) => false,
        };
        ConditionalChain {
            outcome: self,
            verdict,
        }
    }
}

impl<T, E> ConditionalChain<T, E> {
    /// Run `callback` iff the outcome succeeded and the predicate held.
    /// Returns the chain, so multiple `then` calls stack.
    pub fn then<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if self.verdict {
            if let Outcome::Success(ref value) = self.outcome {
                callback(value);
            }
        }
        self
    }

    /// Terminal branch: fires for a rejected success value or for any
    /// failure, then returns the original outcome so ordinary chaining can
    /// continue after the branch.
    pub fn otherwise<F>(self, callback: F) -> Outcome<T, E>
    where
        F: FnOnce(Otherwise<'_, T, E>),
    {
        match &self.outcome {
            Outcome::Success(value) if !self.verdict => callback(Otherwise::Rejected(value)),
            Outcome::Failure(error) => callback(Otherwise::Failed(error)),
            _ => {}
        }
        self.outcome
    }
}
