//! Testing utilities for dispath.
//!
//! This module provides stock processors and hooks with inspection
//! capabilities:
//!
//! - [`EchoProcessor`] / [`NamedEchoProcessor`]: return their single argument
//! - [`StaticProcessor`]: return a fixed value, no declared parameters
//! - [`CountingProcessor`]: count invocations (resolution-idempotence tests)
//! - [`RecordingHook`]: record every `(path, payload)` pair it observes

use dispath_core::{BoxError, Hook, HookContext, Processor};
use serde_json::Value;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Declares a single parameter named `message` and echoes it back.
pub struct EchoProcessor;

impl Processor for EchoProcessor {
    fn parameters(&self) -> &[&str] {
        &["message"]
    }

    async fn process(&self, args: Vec<Value>) -> Result<Value, BoxError> {
        Ok(args.into_iter().next().unwrap_or(Value::Null))
    }
}

/// Declares a single parameter with a caller-chosen name and echoes it back.
pub struct NamedEchoProcessor {
    params: [&'static str; 1],
}

impl NamedEchoProcessor {
    /// Create a processor declaring one parameter named `name`.
    pub fn new(name: &'static str) -> Self {
        Self { params: [name] }
    }
}

impl Processor for NamedEchoProcessor {
    fn parameters(&self) -> &[&str] {
        &self.params
    }

    async fn process(&self, args: Vec<Value>) -> Result<Value, BoxError> {
        Ok(args.into_iter().next().unwrap_or(Value::Null))
    }
}

/// Declares no parameters and returns a fixed value.
pub struct StaticProcessor {
    value: Value,
}

impl StaticProcessor {
    /// Create a processor always returning `value`.
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl Processor for StaticProcessor {
    fn parameters(&self) -> &[&str] {
        &[]
    }

    async fn process(&self, _args: Vec<Value>) -> Result<Value, BoxError> {
        Ok(self.value.clone())
    }
}

/// A processor that counts invocations and echoes its `message` argument.
///
/// Clones share the counter, so a test can keep a handle while the engine
/// owns the instance.
pub struct CountingProcessor {
    count: Arc<AtomicUsize>,
}

impl CountingProcessor {
    /// Create a processor with a zeroed counter.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of completed `process` calls.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for CountingProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingProcessor {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Processor for CountingProcessor {
    fn parameters(&self) -> &[&str] {
        &["message"]
    }

    async fn process(&self, args: Vec<Value>) -> Result<Value, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(args.into_iter().next().unwrap_or(Value::Null))
    }
}

/// A processor that always fails with a fixed message.
pub struct FailingProcessor {
    message: &'static str,
}

impl FailingProcessor {
    /// Create a processor failing with `message`.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Processor for FailingProcessor {
    fn parameters(&self) -> &[&str] {
        &[]
    }

    async fn process(&self, _args: Vec<Value>) -> Result<Value, BoxError> {
        Err(self.message.into())
    }
}

/// A hook that records every `(path, payload)` pair it observes and passes
/// the payload through unchanged.
///
/// Clones share the recording.
pub struct RecordingHook {
    seen: Arc<Mutex<Vec<(String, Value)>>>,
}

impl RecordingHook {
    /// Create an empty recording hook.
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything recorded so far.
    pub fn seen(&self) -> Vec<(String, Value)> {
        self.seen.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Default for RecordingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingHook {
    fn clone(&self) -> Self {
        Self {
            seen: self.seen.clone(),
        }
    }
}

impl Hook for RecordingHook {
    async fn call(&self, cx: HookContext<'_>, payload: Value) -> Value {
        self.seen
            .lock()
            .unwrap()
            .push((cx.path.to_string(), payload.clone()));
        payload
    }
}
