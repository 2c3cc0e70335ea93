//! Payload-merging hook.

use dispath_core::{Hook, HookContext, payload};
use serde_json::Value;

/// A before-hook that merges a fixed set of fields into object payloads.
///
/// Useful for injecting ambient arguments (session data, defaults) so they
/// become bindable by name. Existing payload keys are overwritten; a
/// non-object payload passes through unchanged.
pub struct MergeHook {
    extra: Value,
}

impl MergeHook {
    /// Create a hook merging `extra` into every payload it sees.
    pub fn new(extra: Value) -> Self {
        Self { extra }
    }
}

impl Hook for MergeHook {
    async fn call(&self, _cx: HookContext<'_>, args: Value) -> Value {
        payload::merge(args, &self.extra)
    }
}
