//! Logging hook for dispatch observation.

use dispath_core::{Hook, HookContext};
use serde_json::Value;

/// A hook that logs each dispatch and passes the payload through unchanged.
pub struct LoggingHook;

impl Hook for LoggingHook {
    async fn call(&self, cx: HookContext<'_>, payload: Value) -> Value {
        tracing::info!(
            path = cx.path,
            verb = ?cx.option.and_then(|option| option.verb),
            insecure = cx.option.is_some_and(dispath_core::RoutingOption::is_insecure),
            "processing path"
        );
        payload
    }
}
