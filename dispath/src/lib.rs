//! # dispath - Hierarchical Path Dispatcher
//!
//! `dispath` maps slash-delimited path strings onto handler objects: a
//! declarative routing tree is flattened once at construction, handlers are
//! resolved lazily through a pluggable [`Resolver`] and cached per path,
//! named arguments are bound from an untyped JSON payload into each
//! handler's declared parameter order, and ordered before/after [`Hook`]
//! chains wrap every invocation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dispath::{Engine, FactoryResolver, Routing};
//! use serde_json::json;
//!
//! let engine = Engine::builder()
//!     .routing(vec![
//!         Routing::leaf("greet", "greeter"),
//!     ])
//!     .resolver(FactoryResolver::new().with("greeter", || Greeter))
//!     .build()?;
//!
//! let reply = engine.process("/greet", json!({ "name": "ada" })).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use dispath_core::{
    // Payload capabilities
    ArgumentProvider,
    // Error types
    BoxError,
    DispatchError,
    // Hook
    DynHook,
    // Processor
    DynProcessor,
    Hook,
    HookContext,
    HookKind,
    Processor,
    // Resolution
    Resolver,
    // Routing definition
    Routing,
    RoutingOption,
    RoutingTarget,
    Token,
    Verb,
};

pub use dispath_std::{
    binder::ArgumentBinder,
    factory::FactoryResolver,
    table::{RouteEntry, RouteTable},
};

mod engine;
pub use engine::{Engine, EngineBuilder};

/// Payload conventions (presence lookup, object merge).
pub mod payload {
    pub use dispath_core::payload::{lookup, merge};
}

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use dispath_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use dispath_std::testing::*;
}

/// Prelude module - common imports for dispath.
///
/// # Usage
///
/// ```rust,ignore
/// use dispath::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ArgumentProvider, BoxError, DispatchError, Engine, EngineBuilder, FactoryResolver, Hook,
        HookContext, HookKind, Processor, Resolver, Routing, RoutingOption, Token, Verb,
    };
}
