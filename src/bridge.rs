//! Entry points into outcome-space.
//!
//! `try_catch` is the only primitive that turns panicking code into an
//! outcome; `from_result`/`from_option` convert std types; the future
//! bridge awaits fallible futures and exits through the same combinator
//! surface as synchronous code. Stages are awaited strictly in sequence;
//! there is no implicit parallelism, cancellation, or timeout here.

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::errors::panic_message;
use crate::outcome::Outcome;

/// Run `f` inside a panic trap: its return value becomes a `Success`, a
/// trapped panic is reduced to its message and handed to `on_error`.
/// Synchronous only; see the note on [`Outcome::attempt`] for why deferred
/// work must not be trapped this way.
pub fn try_catch<T, E, F, H>(f: F, on_error: H) -> Outcome<T, E>
where
    F: FnOnce() -> T,
    H: FnOnce(String) -> E,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => {
            let message = panic_message(payload);
            log::trace!("try_catch trapped panic: {message}");
            Outcome::Failure(on_error(message))
        }
    }
}

/// Convert a `std::result::Result` into an outcome.
pub fn from_result<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    result.into()
}

/// Convert an `Option` into an outcome, manufacturing the error for
/// `None` lazily.
pub fn from_option<T, E, F>(option: Option<T>, on_none: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(on_none()),
    }
}

/// Await a fallible future into an outcome.
pub async fn from_future<T, E, Fut>(fut: Fut) -> Outcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    match fut.await {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            log::trace!("future bridge observed a rejection");
            Outcome::Failure(error)
        }
    }
}

/// Await a fallible future, mapping the error branch while bridging.
pub async fn from_future_with<T, E, F2, Fut, H>(fut: Fut, on_error: H) -> Outcome<T, F2>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E) -> F2,
{
    from_future(fut).await.map_failure(on_error)
}

/// Await a fallible future straight into the positional pair:
/// `(Some(value), None)` on resolution, `(None, Some(error))` on
/// rejection. The idiomatic exit for async call sites that destructure.
pub async fn from_future_pair<T, E, Fut>(fut: Fut) -> (Option<T>, Option<E>)
where
    Fut: Future<Output = Result<T, E>>,
{
    from_future(fut).await.into_pair()
}

/// Combine an ordered sequence of outcomes into one: all successes become
/// `success(values)` in order, the first failure short-circuits. Empty
/// input yields `success(vec![])`.
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut collected = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => collected.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(collected)
}
