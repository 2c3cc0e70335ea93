//! The dispatch engine facade.
//!
//! [`Engine`] composes the flat route table, the lazy handler cache, the
//! argument binder and the hook chains behind a single
//! [`process`](Engine::process) operation, plus introspection over the
//! flattened paths.

use dispath_core::{
    ArgumentProvider, DispatchError, DynHook, DynProcessor, Hook, HookContext, HookKind, Resolver,
    Routing, RoutingOption,
};
use dispath_std::{binder::ArgumentBinder, table::RouteTable};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// Builder for an [`Engine`].
///
/// The routing definition and the resolver are both required;
/// [`build`](EngineBuilder::build) fails with
/// [`DispatchError::Construction`] when either is missing. Flattening runs
/// in `build`; no handler is resolved at construction time.
#[derive(Default)]
pub struct EngineBuilder {
    routings: Option<Vec<Routing>>,
    resolver: Option<Box<dyn Resolver>>,
}

impl EngineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the routing definition.
    pub fn routing(mut self, routings: Vec<Routing>) -> Self {
        self.routings = Some(routings);
        self
    }

    /// Supply the dependency-resolution capability.
    pub fn resolver(mut self, resolver: impl Resolver) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Flatten the routing definition and build the engine.
    pub fn build(self) -> Result<Engine, DispatchError> {
        let routings = self
            .routings
            .ok_or(DispatchError::Construction("routing definition missing"))?;
        let resolver = self
            .resolver
            .ok_or(DispatchError::Construction("resolver missing"))?;
        Ok(Engine {
            table: RouteTable::flatten(&routings),
            resolver,
            handlers: Mutex::new(HashMap::new()),
            binder: ArgumentBinder::new(),
            before: Vec::new(),
            after: Vec::new(),
        })
    }
}

/// The hierarchical path dispatcher.
///
/// # Lifecycle
///
/// The routing definition is supplied once at construction and immutable
/// afterward. Handler instances and parameter-name lists are cached on first
/// use of a path and persist for the engine's lifetime; nothing is evicted.
/// Hook lists and argument providers grow monotonically through the
/// `register_*` calls, which take `&mut self`; registration completes
/// before concurrent processing begins, and the borrow checker enforces it.
///
/// # Concurrency
///
/// `process` takes `&self`; interleaved calls from one or many tasks are
/// safe. First-time resolution of a path is guarded: the handler-cache lock
/// is held across the resolver call, so the external capability is invoked
/// at most once per path.
pub struct Engine {
    table: RouteTable,
    resolver: Box<dyn Resolver>,
    handlers: Mutex<HashMap<String, Arc<dyn DynProcessor>>>,
    binder: ArgumentBinder,
    before: Vec<Arc<dyn DynHook>>,
    after: Vec<Arc<dyn DynHook>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

impl Engine {
    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Dispatch `args` to the handler bound at `path`.
    ///
    /// Resolves (or reuses) the handler, folds the before-hooks over the
    /// payload, binds the positional argument list, invokes the handler,
    /// folds the after-hooks over its result, and returns it. Handler-level
    /// failures come back as [`DispatchError::Processor`], untouched inside.
    pub async fn process(&self, path: &str, args: Value) -> Result<Value, DispatchError> {
        let handler = self.handler(path)?;
        let cx = HookContext {
            path,
            option: self.table.option(path),
        };

        let mut payload = args;
        for hook in &self.before {
            payload = hook.call_dyn(cx, payload).await;
        }

        let values = self.binder.bind(path, handler.as_ref(), &payload);
        let mut result = handler
            .process_dyn(values)
            .await
            .map_err(DispatchError::Processor)?;

        for hook in &self.after {
            result = hook.call_dyn(cx, result).await;
        }
        Ok(result)
    }

    /// Install a fallback value source for argument `name`.
    pub fn register_argument(&mut self, name: impl Into<String>, provider: impl ArgumentProvider) {
        self.binder.register(name, provider);
    }

    /// Append a hook to the matching chain. Registration order is execution
    /// order; there is no removal.
    pub fn register_hook(&mut self, kind: HookKind, hook: impl Hook) {
        let hook: Arc<dyn DynHook> = Arc::new(hook);
        match kind {
            HookKind::Before => self.before.push(hook),
            HookKind::After => self.after.push(hook),
        }
    }

    /// All flattened absolute paths, in flattening traversal order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.table.paths()
    }

    /// Paths whose option explicitly sets `security` to `false`.
    pub fn insecurity_paths(&self) -> Vec<&str> {
        self.table.insecurity_paths()
    }

    /// The option stored for `path`, if any.
    pub fn option(&self, path: &str) -> Option<&RoutingOption> {
        self.table.option(path)
    }

    /// Resolve-or-reuse the handler for `path`.
    ///
    /// The cache lock is held across the resolver call, making resolution
    /// at-most-once per path.
    fn handler(&self, path: &str) -> Result<Arc<dyn DynProcessor>, DispatchError> {
        let mut cache = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handler) = cache.get(path) {
            return Ok(Arc::clone(handler));
        }
        let entry = self.table.entry(path).ok_or_else(|| {
            tracing::error!(path, "cannot find handler for path");
            DispatchError::PathNotFound(path.to_string())
        })?;
        let handler = self
            .resolver
            .resolve(entry.token())
            .ok_or_else(|| DispatchError::ResolutionFailed(path.to_string()))?;
        cache.insert(path.to_string(), Arc::clone(&handler));
        Ok(handler)
    }
}
