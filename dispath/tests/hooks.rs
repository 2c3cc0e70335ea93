//! Hook chain tests: ordering, payload threading, context metadata.

use dispath::{
    Engine, FactoryResolver, Hook, HookContext, HookKind, Routing, RoutingOption,
    hooks::MergeHook,
    testing::{NamedEchoProcessor, RecordingHook},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

mod common;
use common::{AppendFieldHook, AppendResultHook, fixture_resolver, fixture_routing};

fn fixture_engine() -> Engine {
    Engine::builder()
        .routing(fixture_routing())
        .resolver(fixture_resolver())
        .build()
        .unwrap()
}

#[tokio::test]
async fn before_hook_merges_arguments_into_the_payload() {
    let mut engine = fixture_engine();
    engine.register_hook(HookKind::Before, MergeHook::new(json!({ "test": "hello" })));

    let ret = engine
        .process("/fold/two", json!({ "message": "succ" }))
        .await
        .unwrap();
    assert_eq!(ret, json!("hello"));
}

#[tokio::test]
async fn before_hooks_fold_left_to_right() {
    let mut engine = Engine::builder()
        .routing(vec![Routing::leaf("trace", "tracer")])
        .resolver(FactoryResolver::new().with("tracer", || NamedEchoProcessor::new("trace")))
        .build()
        .unwrap();
    engine.register_hook(
        HookKind::Before,
        AppendFieldHook {
            key: "trace",
            suffix: "a",
        },
    );
    engine.register_hook(
        HookKind::Before,
        AppendFieldHook {
            key: "trace",
            suffix: "b",
        },
    );

    // The handler must see h2(h1(args)).
    let ret = engine.process("/trace", json!({})).await.unwrap();
    assert_eq!(ret, json!("ab"));
}

#[tokio::test]
async fn after_hooks_fold_left_to_right_over_the_result() {
    let mut engine = fixture_engine();
    engine.register_hook(HookKind::After, AppendResultHook { suffix: "a" });
    engine.register_hook(HookKind::After, AppendResultHook { suffix: "b" });

    // The caller must see a2(a1(result)).
    let ret = engine
        .process("/one", json!({ "message": "succ" }))
        .await
        .unwrap();
    assert_eq!(ret, json!("succab"));
}

#[tokio::test]
async fn after_hook_observes_the_handler_result() {
    let recorder = RecordingHook::new();
    let mut engine = fixture_engine();
    engine.register_hook(HookKind::After, recorder.clone());

    engine
        .process("/fold/one", json!({ "message": "succ" }))
        .await
        .unwrap();

    assert_eq!(
        recorder.seen(),
        vec![("/fold/one".to_string(), json!("succ"))]
    );
}

#[tokio::test]
async fn before_hook_observes_the_original_payload_and_path() {
    let recorder = RecordingHook::new();
    let mut engine = fixture_engine();
    engine.register_hook(HookKind::Before, recorder.clone());

    engine
        .process("/two", json!({ "message": "succ" }))
        .await
        .unwrap();
    engine
        .process("/three", json!({ "message": "other" }))
        .await
        .unwrap();

    assert_eq!(
        recorder.seen(),
        vec![
            ("/two".to_string(), json!({ "message": "succ" })),
            ("/three".to_string(), json!({ "message": "other" })),
        ]
    );
}

struct OptionProbe {
    insecure: Arc<Mutex<Option<bool>>>,
}

impl Hook for OptionProbe {
    async fn call(&self, cx: HookContext<'_>, payload: Value) -> Value {
        *self.insecure.lock().unwrap() = cx.option.map(RoutingOption::is_insecure);
        payload
    }
}

#[tokio::test]
async fn hook_context_carries_the_route_option() {
    let insecure = Arc::new(Mutex::new(None));
    let mut engine = fixture_engine();
    engine.register_hook(
        HookKind::Before,
        OptionProbe {
            insecure: insecure.clone(),
        },
    );

    engine
        .process("/fold/two", json!({ "test": "x" }))
        .await
        .unwrap();
    assert_eq!(*insecure.lock().unwrap(), Some(true));

    engine
        .process("/two", json!({ "message": "x" }))
        .await
        .unwrap();
    assert_eq!(*insecure.lock().unwrap(), None, "bare leaf has no option");
}
