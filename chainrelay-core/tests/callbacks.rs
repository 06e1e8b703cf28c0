use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chainrelay_core::{CallbackHandler, CallbackManager, RunContext, RunType, TryFromValue, Value};
use serde_json::json;

struct RecordingHandler {
    label: &'static str,
    events: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl CallbackHandler for RecordingHandler {
    async fn on_end(&self, ctx: &RunContext, _outputs: &Value, _duration_ms: u128) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:end:{}", self.label, ctx.name));
    }

    async fn on_text(&self, _ctx: &RunContext, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:text:{}", self.label, text));
    }
}

#[test]
fn child_context_inherits_trace_and_parent() {
    let root = RunContext::root(RunType::Agent, "agent".to_string(), vec![], BTreeMap::new());
    let child = root.child(RunType::Chain, "step".to_string());
    assert_eq!(child.parent_run_id, Some(root.run_id));
    assert_eq!(child.trace_id, root.trace_id);
    assert_ne!(child.run_id, root.run_id);
}

#[test]
fn child_context_copies_tags_and_metadata() {
    let mut metadata = BTreeMap::new();
    metadata.insert("channel".to_string(), json!("C123"));
    let root = RunContext::root(
        RunType::Agent,
        "agent".to_string(),
        vec!["slack".to_string()],
        metadata,
    );
    let child = root.child(RunType::Llm, "llm".to_string());
    assert_eq!(child.tags, vec!["slack".to_string()]);
    assert_eq!(child.metadata.get("channel"), Some(&json!("C123")));
}

#[test]
fn callback_manager_noop_has_no_handlers() {
    let manager = CallbackManager::noop();
    assert!(manager.is_noop());
    assert_eq!(manager.len(), 0);
}

#[test]
fn try_from_value_reports_serde_errors() {
    let result = Vec::<String>::try_from_value(json!({"not": "a list"}));
    assert!(result.is_err());
}

#[tokio::test]
async fn manager_fans_out_in_registration_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::new(RecordingHandler {
        label: "a",
        events: events.clone(),
    });
    let second = Arc::new(RecordingHandler {
        label: "b",
        events: events.clone(),
    });
    let mut manager = CallbackManager::new(vec![first]);
    manager.add_handler(second);

    let ctx = RunContext::root(RunType::Chain, "step".to_string(), vec![], BTreeMap::new());
    manager.on_end(&ctx, &json!({"text": "done"}), 3).await;
    manager.on_text(&ctx, "hello").await;

    let events = events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec!["a:end:step", "b:end:step", "a:text:hello", "b:text:hello"]
    );
}

#[tokio::test]
async fn unimplemented_hooks_are_noops() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(RecordingHandler {
        label: "a",
        events: events.clone(),
    });
    let manager = CallbackManager::new(vec![handler]);
    let ctx = RunContext::root(RunType::Tool, "search".to_string(), vec![], BTreeMap::new());

    manager.on_start(&ctx, &json!({"q": "x"})).await;
    manager.on_error(&ctx, &json!({"value": "boom"}), 1).await;
    manager.on_stream_chunk(&ctx, &json!("tok")).await;
    manager.on_agent_action(&ctx, &json!({"tool": "search"})).await;
    manager.on_agent_finish(&ctx, &json!({"output": "ok"})).await;

    assert!(events.lock().unwrap().is_empty());
}
