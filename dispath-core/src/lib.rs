//! # dispath-core
//!
//! Core traits and data model for the dispath dispatch engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler libraries and extensions that don't need the full `dispath-std`
//! implementation.
//!
//! # Architecture
//!
//! dispath maps slash-delimited path strings onto handler objects. The
//! pipeline has four stages, each with its seam defined here:
//!
//! ## Routing Definition ([`Routing`])
//!
//! A caller-supplied declarative tree. Each node is either a *leaf* binding
//! a path segment to a handler identity ([`Token`]) or a *group* nesting
//! further nodes. Leaves may carry a [`RoutingOption`] (verb + security
//! metadata, never enforced by the engine itself).
//!
//! ## Handler Resolution ([`Resolver`])
//!
//! Turning a [`Token`] into a live [`Processor`] instance is an external
//! capability. The engine resolves lazily on first use of a path and caches
//! the instance per path for its lifetime.
//!
//! ## Argument Binding ([`Processor::parameters`])
//!
//! Every processor declares the ordered parameter names of its `process`
//! operation. The engine maps an untyped JSON payload onto that order; an
//! absent argument binds as `Value::Null` and is never an error.
//!
//! ## Hook Chains ([`Hook`])
//!
//! Ordered before/after interceptor lists fold over the payload and the
//! result respectively. Hooks own the payload for the duration of their
//! call and return the (possibly replaced) owned value, so mutation is
//! explicit rather than an aliasing accident.
//!
//! # Error Types
//!
//! [`DispatchError`] is the full taxonomy; handler-level failures travel
//! through it as a transparent [`BoxError`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
pub mod payload;
mod processor;
mod resolver;
mod routing;

// Re-exports
pub use error::{BoxError, DispatchError};
pub use hook::{DynHook, Hook, HookContext, HookKind};
pub use payload::ArgumentProvider;
pub use processor::{DynProcessor, Processor};
pub use resolver::Resolver;
pub use routing::{Routing, RoutingOption, RoutingTarget, Token, Verb};
