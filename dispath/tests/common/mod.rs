#![allow(dead_code)]

use dispath::{
    FactoryResolver, Hook, HookContext, Routing, RoutingOption,
    testing::{EchoProcessor, NamedEchoProcessor},
};
use serde_json::Value;

// ============================================================================
// Routing fixture
// ============================================================================

pub fn insecure() -> RoutingOption {
    RoutingOption {
        verb: None,
        security: Some(false),
    }
}

/// The canonical six-leaf fixture: `echo` declares parameter `message`,
/// `echo-test` declares parameter `test`.
pub fn fixture_routing() -> Vec<Routing> {
    vec![
        Routing::leaf_with("one", "echo", insecure()),
        Routing::leaf("two", "echo"),
        Routing::leaf("three", "echo"),
        Routing::group(
            "fold",
            vec![
                Routing::leaf("one", "echo"),
                Routing::leaf_with("two", "echo-test", insecure()),
                Routing::leaf("three", "echo"),
            ],
        ),
    ]
}

pub fn fixture_resolver() -> FactoryResolver {
    FactoryResolver::new()
        .with("echo", || EchoProcessor)
        .with("echo-test", || NamedEchoProcessor::new("test"))
}

// ============================================================================
// Test hooks
// ============================================================================

/// Appends a suffix to the string stored at `key` in object payloads,
/// creating the field when absent. Used to observe before-hook ordering.
pub struct AppendFieldHook {
    pub key: &'static str,
    pub suffix: &'static str,
}

impl Hook for AppendFieldHook {
    async fn call(&self, _cx: HookContext<'_>, mut payload: Value) -> Value {
        if let Value::Object(map) = &mut payload {
            let slot = map
                .entry(self.key)
                .or_insert_with(|| Value::String(String::new()));
            if let Value::String(text) = slot {
                text.push_str(self.suffix);
            }
        }
        payload
    }
}

/// Appends a suffix to string results. Used to observe after-hook ordering.
pub struct AppendResultHook {
    pub suffix: &'static str,
}

impl Hook for AppendResultHook {
    async fn call(&self, _cx: HookContext<'_>, mut result: Value) -> Value {
        if let Value::String(text) = &mut result {
            text.push_str(self.suffix);
        }
        result
    }
}
