//! Conventions for the untyped argument payload.
//!
//! The payload handed to `process()` is a `serde_json::Value`, treated as a
//! mapping from parameter name to value. These helpers define what counts
//! as "present": a key that exists with a non-`null` value. `0`, `""` and
//! `false` are legitimate bound values.

use serde_json::Value;

/// Look up `name` in an object payload.
///
/// Returns `None` when the payload is not an object, the key is absent, or
/// the stored value is `null`.
pub fn lookup<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    match payload.get(name) {
        Some(Value::Null) | None => None,
        found => found,
    }
}

/// Merge the fields of `extra` into `payload` when both are objects.
///
/// Existing keys are overwritten. A non-object payload or `extra` leaves
/// `payload` unchanged.
pub fn merge(mut payload: Value, extra: &Value) -> Value {
    if let (Value::Object(target), Value::Object(source)) = (&mut payload, extra) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    payload
}

/// Named fallback source for an argument the payload lacks.
///
/// Providers are registered per parameter name and invoked with the whole
/// (post-hook) payload when [`lookup`] finds nothing for that name.
pub trait ArgumentProvider: Send + Sync + 'static {
    /// Produce the fallback value.
    fn provide(&self, payload: &Value) -> Value;
}

// Blanket impl for closures
impl<F> ArgumentProvider for F
where
    F: Fn(&Value) -> Value + Send + Sync + 'static,
{
    fn provide(&self, payload: &Value) -> Value {
        (self)(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_ignores_null_but_keeps_falsy_values() {
        let payload = json!({ "a": 0, "b": "", "c": false, "d": null });
        assert_eq!(lookup(&payload, "a"), Some(&json!(0)));
        assert_eq!(lookup(&payload, "b"), Some(&json!("")));
        assert_eq!(lookup(&payload, "c"), Some(&json!(false)));
        assert_eq!(lookup(&payload, "d"), None);
        assert_eq!(lookup(&payload, "e"), None);
    }

    #[test]
    fn lookup_on_non_object_is_absent() {
        assert_eq!(lookup(&json!("scalar"), "a"), None);
        assert_eq!(lookup(&Value::Null, "a"), None);
    }

    #[test]
    fn merge_overwrites_existing_keys() {
        let merged = merge(json!({ "a": 1, "b": 2 }), &json!({ "b": 3, "c": 4 }));
        assert_eq!(merged, json!({ "a": 1, "b": 3, "c": 4 }));
    }

    #[test]
    fn merge_into_non_object_is_a_no_op() {
        assert_eq!(merge(json!(42), &json!({ "a": 1 })), json!(42));
    }
}
