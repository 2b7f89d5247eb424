//! Transient chaining sugars over an outcome.
//!
//! Both chains are intermediate values that must be resolved back into
//! outcome-space: a [`ConditionalChain`] by `otherwise`, an
//! [`AttemptChain`] by `catch`. Neither transforms the carried value; they
//! exist for side-effecting branches and panic trapping.

pub mod attempt;
pub mod conditional;

pub use attempt::{AttemptChain, Caught};
pub use conditional::{ConditionalChain, Otherwise};
