//! Map-backed default resolver.

use dispath_core::{DynProcessor, Processor, Resolver, Token};
use std::{collections::HashMap, sync::Arc};

type Factory = Box<dyn Fn() -> Arc<dyn DynProcessor> + Send + Sync>;

/// A [`Resolver`] backed by an explicit factory map.
///
/// Suitable for tests and simple deployments; hosts with a real dependency
/// container implement [`Resolver`] against it instead.
///
/// Each `resolve` call invokes the registered factory. Instance stability
/// per path comes from the engine's handler cache, not from this resolver:
/// two paths bound to the same token each get their own factory call.
///
/// # Example
/// ```ignore
/// let resolver = FactoryResolver::new()
///     .with("echo", || EchoProcessor)
///     .with_instance("shared", Arc::new(CountingProcessor::new()));
/// ```
#[derive(Default)]
pub struct FactoryResolver {
    factories: HashMap<Token, Factory>,
}

impl FactoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory constructing a fresh processor per resolution.
    pub fn with<P, F>(mut self, token: impl Into<Token>, factory: F) -> Self
    where
        P: Processor,
        F: Fn() -> P + Send + Sync + 'static,
    {
        self.factories
            .insert(token.into(), Box::new(move || Arc::new(factory())));
        self
    }

    /// Register a pre-built instance handed out on every resolution.
    pub fn with_instance(mut self, token: impl Into<Token>, instance: Arc<dyn DynProcessor>) -> Self {
        self.factories
            .insert(token.into(), Box::new(move || Arc::clone(&instance)));
        self
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no identity is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Resolver for FactoryResolver {
    fn resolve(&self, token: &Token) -> Option<Arc<dyn DynProcessor>> {
        self.factories.get(token).map(|factory| factory())
    }
}
