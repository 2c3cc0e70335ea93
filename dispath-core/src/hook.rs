//! Before/after interceptors wrapped around every dispatch.
//!
//! Hooks come in two ordered chains. Before-hooks fold left-to-right over
//! the incoming argument payload; after-hooks fold the same way over the
//! handler's result. The fold is strictly sequential: hook *n+1* never
//! starts before hook *n*'s result is available.
//!
//! # Payload ownership
//!
//! A hook receives the payload by value and returns an owned value: the
//! same one mutated in place, or an entirely new one. The chain performs no
//! defensive copying, so whatever a hook returns is exactly what the next
//! stage (later hooks, the argument binder, or the eventual caller) sees.
//!
//! Hooks have no error channel. A hook that wants to veto a dispatch should
//! instead strip or rewrite the payload.

use crate::routing::RoutingOption;
use serde_json::Value;
use std::{future::Future, pin::Pin};

/// Which side of handler invocation a hook attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Runs over the argument payload, before binding and invocation.
    Before,
    /// Runs over the handler's result.
    After,
}

/// Read-only dispatch context handed to every hook invocation.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// The absolute path being processed.
    pub path: &'a str,
    /// The flat route entry's option, if the leaf carried one.
    pub option: Option<&'a RoutingOption>,
}

/// A before/after interceptor.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch. The
/// engine's hook chains store [`DynHook`] trait objects; every `Hook`
/// converts automatically via the blanket impl.
pub trait Hook: Send + Sync + 'static {
    /// Transform the payload (before) or the result (after).
    fn call(&self, cx: HookContext<'_>, payload: Value) -> impl Future<Output = Value> + Send;
}

/// Dynamic object-safe version of [`Hook`].
pub trait DynHook: Send + Sync + 'static {
    /// Transform the payload or result (dynamic dispatch version).
    fn call_dyn<'a>(
        &'a self,
        cx: HookContext<'a>,
        payload: Value,
    ) -> Pin<Box<dyn Future<Output = Value> + Send + 'a>>;
}

// Blanket implementation: any Hook implements DynHook automatically.
impl<T: Hook> DynHook for T {
    fn call_dyn<'a>(
        &'a self,
        cx: HookContext<'a>,
        payload: Value,
    ) -> Pin<Box<dyn Future<Output = Value> + Send + 'a>> {
        Box::pin(self.call(cx, payload))
    }
}

// Allow Box<dyn DynHook> to be used where Hook is expected.
impl Hook for Box<dyn DynHook> {
    async fn call(&self, cx: HookContext<'_>, payload: Value) -> Value {
        self.call_dyn(cx, payload).await
    }
}
