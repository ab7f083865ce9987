//! Error types for action composition.
//!
//! - [`ActionError`] — Failures raised by leaves, composites, and hooks.
//! - [`AggregateError`] — Combined child failures from Sequence/Parallel.

pub mod action_error;

pub use action_error::{ActionError, AggregateError};

/// Convenience alias for action-level results.
pub type ActionResult<T> = Result<T, ActionError>;
