//! Railway-style error handling built on a two-variant outcome type.
//!
//! A computation that may fail produces an [`Outcome`]: `Success` holding
//! its value or `Failure` holding its error. Combinators, the
//! pattern-matching DSL, the conditional and try/catch chains, and the
//! fail-fast collection operators all compose over that one type, so
//! failures flow through ordinary call chains instead of unwinding.
//!
//! ```rust
//! use millrace::prelude::*;
//! use millrace::collection::array;
//!
//! let parsed = array::map(&["4", "8", "15"], |raw: &&str| {
//!     from_result(raw.parse::<u32>()).map_failure(|e| e.to_string())
//! });
//! assert_eq!(parsed, success(vec![4, 8, 15]));
//! ```

pub mod bridge;
pub mod chain;
pub mod collection;
pub mod compose;
pub mod errors;
pub mod matching;
pub mod outcome;

// Re-export commonly used types and entry points
pub use crate::bridge::{
    all, from_future, from_future_pair, from_future_with, from_option, from_result, try_catch,
};
pub use crate::chain::{AttemptChain, Caught, ConditionalChain, Otherwise};
pub use crate::collection::{CloneOptions, JsonObject};
pub use crate::compose::{compose, compose_async, curry2, curry3, pipe, pipe_async, BoxFuture};
pub use crate::errors::StructuralError;
pub use crate::matching::{FieldView, Pattern, SimpleArms, SuccessKind};
pub use crate::outcome::{failure, success, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridge::{
        all, from_future, from_future_pair, from_future_with, from_option, from_result, try_catch,
    };
    pub use crate::chain::{Caught, Otherwise};
    pub use crate::compose::{compose, curry2, curry3, pipe};
    pub use crate::errors::StructuralError;
    pub use crate::matching::{Pattern, SimpleArms};
    pub use crate::outcome::{failure, success, Outcome};
}
