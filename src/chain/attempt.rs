//! Panic-trapping try/catch chain.
//!
//! `attempt(op)` runs the operation inside a panic trap and holds its
//! result, a trapped panic message, or the inherited failure of the
//! receiver until `catch` resolves the chain back into an outcome.
//!
//! # Trap scope
//!
//! The trap observes only panics raised synchronously while `op` runs. An
//! operation that constructs and returns a future (or any other lazily
//! driven value) can still panic later, when that value is driven outside
//! the trap, and the chain will have resolved as a success holding the
//! deferred value. Keep deferred work out of `attempt`; bridge futures
//! through [`from_future`](crate::bridge::from_future) instead.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::errors::panic_message;
use crate::outcome::Outcome;

/// Transient value produced by [`Outcome::attempt`]; resolved by `catch`.
#[derive(Debug)]
pub struct AttemptChain<E, B> {
    state: AttemptState<E, B>,
}

#[derive(Debug)]
enum AttemptState<E, B> {
    /// The operation returned normally.
    Completed(B),
    /// The operation panicked; payload reduced to a message.
    Panicked(String),
    /// The receiver was already a failure; the operation never ran.
    Inherited(E),
}

/// What the `catch` handler receives when the chain did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caught<E> {
    /// A panic trapped while the operation ran.
    Panicked(String),
    /// The original error of a receiver that was already a failure.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Run `op` on the success value inside a panic trap. On a `Failure`
    /// receiver the operation is skipped and the chain defers straight to
    /// `catch`.
    pub fn attempt<B, F>(self, op: F) -> AttemptChain<E, B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Outcome::Success(value) => match catch_unwind(AssertUnwindSafe(move || op(value))) {
                Ok(result) => AttemptChain {
                    state: AttemptState::Completed(result),
                },
                Err(payload) => {
                    let message = panic_message(payload);
                    log::trace!("attempt trapped panic: {message}");
                    AttemptChain {
                        state: AttemptState::Panicked(message),
                    }
                }
            },
            Outcome::Failure(error) => AttemptChain {
                state: AttemptState::Inherited(error),
            },
        }
    }
}

impl<E, B> AttemptChain<E, B> {
    /// Unconditional cleanup effect; the chain passes through unchanged.
    pub fn finally<F>(self, cleanup: F) -> Self
    where
        F: FnOnce(),
    {
        cleanup();
        self
    }

    /// Resolve the chain: the operation's return value becomes a `Success`;
    /// a trapped panic or inherited failure is handed to `handler` and its
    /// result becomes the `Failure`. This is the only way back into
    /// outcome-space.
    pub fn catch<F2, H>(self, handler: H) -> Outcome<B, F2>
    where
        H: FnOnce(Caught<E>) -> F2,
    {
        match self.state {
            AttemptState::Completed(value) => Outcome::Success(value),
            AttemptState::Panicked(message) => Outcome::Failure(handler(Caught::Panicked(message))),
            AttemptState::Inherited(error) => Outcome::Failure(handler(Caught::Failed(error))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use std::cell::RefCell;

    #[test]
    fn test_completed_operation_becomes_success() {
        let out = success::<i32, String>(6)
            .attempt(|n| n * 7)
            .catch(|_| "unreachable".to_string());
        assert_eq!(out, success(42));
    }

    #[test]
    fn test_panic_is_trapped_and_handled() {
        let out: Outcome<i32, String> = success::<i32, String>(0)
            .attempt(|n| {
                if n == 0 {
                    panic!("division by zero");
                }
                100 / n
            })
            .catch(|caught| match caught {
                Caught::Panicked(msg) => format!("trapped: {msg}"),
                Caught::Failed(e) => e,
            });
        assert_eq!(out, failure("trapped: division by zero".to_string()));
    }

    #[test]
    fn test_failure_receiver_skips_operation() {
        let ran = RefCell::new(false);
        let out: Outcome<i32, String> = failure::<i32, String>("upstream".to_string())
            .attempt(|n| {
                *ran.borrow_mut() = true;
                n + 1
            })
            .catch(|caught| match caught {
                Caught::Panicked(msg) => msg,
                Caught::Failed(e) => e,
            });
        assert!(!*ran.borrow());
        assert_eq!(out, failure("upstream".to_string()));
    }

    #[test]
    fn test_finally_runs_unconditionally() {
        let order = RefCell::new(Vec::new());

        let out = success::<i32, String>(1)
            .attempt(|n| n + 1)
            .finally(|| order.borrow_mut().push("cleanup ok"))
            .catch(|_| "err".to_string());
        assert_eq!(out, success(2));

        let out: Outcome<i32, String> = failure::<i32, String>("e".to_string())
            .attempt(|n| n + 1)
            .finally(|| order.borrow_mut().push("cleanup err"))
            .catch(|_| "err".to_string());
        assert_eq!(out, failure("err".to_string()));

        assert_eq!(*order.borrow(), vec!["cleanup ok", "cleanup err"]);
    }

    #[test]
    fn test_finally_stacks_before_catch() {
        let count = RefCell::new(0);
        let out = success::<i32, String>(5)
            .attempt(|n| n)
            .finally(|| *count.borrow_mut() += 1)
            .finally(|| *count.borrow_mut() += 1)
            .catch(|_| "err".to_string());
        assert_eq!(out, success(5));
        assert_eq!(*count.borrow(), 2);
    }
}
