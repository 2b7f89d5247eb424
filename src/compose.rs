//! Kleisli composition and explicit-arity currying.
//!
//! `pipe` reads left to right, `compose` right to left; both short-circuit
//! on the first failure. The `pipe!`/`compose!` macros chain any number of
//! stages. The async variants await each stage strictly before starting
//! the next.

use std::future::Future;
use std::pin::Pin;

use crate::outcome::Outcome;

/// Boxed future alias used by the async composition helpers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Left-to-right Kleisli composition: `pipe(f, g)(x)` is `g` applied to
/// the success of `f(x)`.
pub fn pipe<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Outcome<C, E>
where
    F: Fn(A) -> Outcome<B, E>,
    G: Fn(B) -> Outcome<C, E>,
{
    move |a| f(a).and_then(&g)
}

/// Right-to-left Kleisli composition: `compose(f, g)(x)` is `f` applied to
/// the success of `g(x)`.
pub fn compose<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Outcome<C, E>
where
    F: Fn(B) -> Outcome<C, E>,
    G: Fn(A) -> Outcome<B, E>,
{
    move |a| g(a).and_then(&f)
}

/// Thread a value left-to-right through outcome-returning stages,
/// stopping at the first failure.
///
/// ```rust
/// use millrace::{success, failure, pipe, Outcome};
///
/// let half = |n: i32| if n % 2 == 0 { success(n / 2) } else { failure("odd") };
/// let positive = |n: i32| if n > 0 { success(n) } else { failure("negative") };
///
/// let out: Outcome<i32, &str> = pipe!(12, half, positive);
/// assert_eq!(out, success(6));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr, $stage:expr $(,)?) => {
        $stage($value)
    };
    ($value:expr, $stage:expr, $($rest:expr),+ $(,)?) => {
        match $stage($value) {
            $crate::Outcome::Success(value) => $crate::pipe!(value, $($rest),+),
            $crate::Outcome::Failure(error) => $crate::Outcome::Failure(error),
        }
    };
}

/// Thread a value through stages right-to-left; `compose!(x, f, g)` runs
/// `g` first. Short-circuits on the first failure.
#[macro_export]
macro_rules! compose {
    ($value:expr, $stage:expr $(,)?) => {
        $stage($value)
    };
    ($value:expr, $stage:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose!($value, $($rest),+).and_then($stage)
    };
}

/// Async `pipe`: the second stage starts only after the first resolves,
/// and a first-stage failure skips the second entirely.
pub fn pipe_async<A, B, C, E, F, G, FutB, FutC>(
    f: F,
    g: G,
) -> impl FnOnce(A) -> BoxFuture<'static, Outcome<C, E>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    E: 'static,
    F: FnOnce(A) -> FutB + 'static,
    G: FnOnce(B) -> FutC + 'static,
    FutB: Future<Output = Outcome<B, E>> + 'static,
    FutC: Future<Output = Outcome<C, E>> + 'static,
{
    move |a| {
        Box::pin(async move {
            match f(a).await {
                Outcome::Success(value) => g(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }
}

/// Async `compose`: `compose_async(f, g)` runs `g` first, then `f` on its
/// success.
pub fn compose_async<A, B, C, E, F, G, FutB, FutC>(
    f: F,
    g: G,
) -> impl FnOnce(A) -> BoxFuture<'static, Outcome<C, E>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    E: 'static,
    F: FnOnce(B) -> FutC + 'static,
    G: FnOnce(A) -> FutB + 'static,
    FutB: Future<Output = Outcome<B, E>> + 'static,
    FutC: Future<Output = Outcome<C, E>> + 'static,
{
    move |a| {
        Box::pin(async move {
            match g(a).await {
                Outcome::Success(value) => f(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }
}

/// Curry a two-argument function into two single-argument applications.
pub fn curry2<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    move |a| {
        let f = f.clone();
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Curry a three-argument function into three single-argument
/// applications.
pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
    F: Fn(A, B, C) -> D + Clone + 'static,
{
    move |a| {
        let f = f.clone();
        Box::new(move |b: B| {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c)) as Box<dyn Fn(C) -> D>
        })
    }
}
