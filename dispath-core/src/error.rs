//! Error types for dispath.
//!
//! This module provides the dispatch error taxonomy using `thiserror`:
//!
//! - [`DispatchError`] - everything `process()` and engine construction can
//!   surface
//! - [`BoxError`] - the boxed error type processors fail with
//!
//! A missing individual argument is deliberately *not* part of the taxonomy:
//! it is logged and bound as `Value::Null`, and execution continues.

use thiserror::Error;

/// A boxed error type for handler-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by engine construction and dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The engine was built without a required input.
    #[error("engine construction failed: {0}")]
    Construction(&'static str),

    /// `process()` was called with a path absent from the flat route table.
    #[error("cannot find handler for path ({0})")]
    PathNotFound(String),

    /// The external resolution capability yielded no instance for the path.
    #[error("create handler of {0} failed")]
    ResolutionFailed(String),

    /// The processor bound to the path failed. The inner error is whatever
    /// the processor raised, untouched; the engine never wraps, retries, or
    /// recovers handler-level failures.
    #[error(transparent)]
    Processor(BoxError),
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Processor(err)
    }
}
