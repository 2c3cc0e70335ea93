//! The processing endpoint bound to a leaf path.
//!
//! A [`Processor`] is the terminal point of a dispatch: once the engine has
//! resolved the instance, folded the before-hooks over the payload, and
//! bound the positional argument list, `process` runs the business logic.
//!
//! # Declared parameters
//!
//! The source of truth for argument binding is [`Processor::parameters`]:
//! the ordered formal parameter names of the processing operation. This is
//! an explicit registration contract; a statically compiled language cannot
//! introspect parameter names from source text, so every processor states
//! them up front. The engine caches the list per path and assumes it stable
//! for the engine's lifetime.

use crate::error::BoxError;
use serde_json::Value;
use std::{future::Future, pin::Pin};

/// A handler for one or more leaf paths.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch. The
/// engine's handler cache stores [`DynProcessor`] trait objects; every
/// `Processor` converts automatically via the blanket impl.
pub trait Processor: Send + Sync + 'static {
    /// Ordered formal parameter names of [`process`](Processor::process).
    ///
    /// The engine binds payload entries onto positional slots in exactly
    /// this order.
    fn parameters(&self) -> &[&str];

    /// Execute with positional arguments.
    ///
    /// Arguments arrive in [`parameters`](Processor::parameters) order; a
    /// slot the payload (and providers) could not fill is `Value::Null`.
    /// Errors returned here propagate to the caller unmodified.
    fn process(&self, args: Vec<Value>) -> impl Future<Output = Result<Value, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Processor`].
///
/// Use this trait when you need runtime polymorphism (the handler cache,
/// the [`Resolver`](crate::Resolver) return type).
pub trait DynProcessor: Send + Sync + 'static {
    /// Ordered formal parameter names (dynamic dispatch version).
    fn parameters(&self) -> &[&str];

    /// Execute with positional arguments (dynamic dispatch version).
    fn process_dyn<'a>(
        &'a self,
        args: Vec<Value>,
    ) -> Pin<Box<dyn Future<Output = Result<Value, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any Processor implements DynProcessor automatically.
impl<T: Processor> DynProcessor for T {
    fn parameters(&self) -> &[&str] {
        Processor::parameters(self)
    }

    fn process_dyn<'a>(
        &'a self,
        args: Vec<Value>,
    ) -> Pin<Box<dyn Future<Output = Result<Value, BoxError>> + Send + 'a>> {
        Box::pin(self.process(args))
    }
}
