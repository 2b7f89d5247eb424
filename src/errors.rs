//! Structural error types for library-detected failure conditions.
//!
//! Domain errors are whatever callers place inside a `Failure`; this module
//! only covers the conditions the collection operators detect themselves,
//! such as a missing object key or a path that dead-ends. Operators that
//! take an explicit error factory (`head`, `get`, `deep_clone`, `merge`)
//! produce caller-typed errors instead and never appear here.

use thiserror::Error;

/// A failure condition detected by the library itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A required key was absent from an object. A key holding `null` is
    /// present; only a missing entry raises this.
    #[error("missing key `{key}`")]
    MissingKey { key: String },

    /// A path walk dead-ended: the segment was absent, or the value at
    /// that point was not an object.
    #[error("missing path segment `{segment}` at depth {position}")]
    MissingPath { segment: String, position: usize },
}

impl StructuralError {
    /// A missing object key.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// A missing path segment, with its zero-based position in the path.
    pub fn missing_path(segment: impl Into<String>, position: usize) -> Self {
        Self::MissingPath {
            segment: segment.into(),
            position,
        }
    }
}

/// Extract a human-readable message from a trapped panic payload.
///
/// Panic payloads are `&str` or `String` in practice; anything else gets a
/// fixed fallback.
pub(crate) fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
