//! Positional argument binding.
//!
//! The binder derives, per path, the ordered parameter-name list the bound
//! processor declares, then maps the untyped payload onto that order. Name
//! lists are cached per path and never recomputed: the processor bound to a
//! path cannot change after construction.
//!
//! Value lookup, per name:
//! 1. a payload entry that exists with a non-`null` value wins;
//! 2. otherwise a registered [`ArgumentProvider`] for that name is invoked
//!    with the whole payload;
//! 3. otherwise a diagnostic is logged and the slot binds as `Value::Null`.
//!    A missing argument is not an error.

use dispath_core::{ArgumentProvider, DynProcessor, payload};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// Derives parameter-name lists and binds payload values onto them.
#[derive(Default)]
pub struct ArgumentBinder {
    names: Mutex<HashMap<String, Arc<[String]>>>,
    providers: HashMap<String, Box<dyn ArgumentProvider>>,
}

impl ArgumentBinder {
    /// Create an empty binder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fallback value source for argument `name`.
    pub fn register(&mut self, name: impl Into<String>, provider: impl ArgumentProvider) {
        self.providers.insert(name.into(), Box::new(provider));
    }

    /// The ordered parameter names for `path`, cached on first use.
    pub fn names(&self, path: &str, processor: &dyn DynProcessor) -> Arc<[String]> {
        let mut cache = self.names.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(names) = cache.get(path) {
            return Arc::clone(names);
        }
        let names: Arc<[String]> = processor
            .parameters()
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        cache.insert(path.to_string(), Arc::clone(&names));
        names
    }

    /// The value bound for one argument name.
    pub fn value(&self, name: &str, args: &Value) -> Value {
        if let Some(found) = payload::lookup(args, name) {
            return found.clone();
        }
        if let Some(provider) = self.providers.get(name) {
            return provider.provide(args);
        }
        tracing::debug!(name, "cannot find argument, binding null");
        Value::Null
    }

    /// The positional argument list for a dispatch, in declared order.
    pub fn bind(&self, path: &str, processor: &dyn DynProcessor, args: &Value) -> Vec<Value> {
        self.names(path, processor)
            .iter()
            .map(|name| self.value(name, args))
            .collect()
    }
}
