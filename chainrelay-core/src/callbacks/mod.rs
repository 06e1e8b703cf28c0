use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

use async_trait::async_trait;
use uuid::Uuid;

use crate::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunType {
    Chain,
    Llm,
    Tool,
    Agent,
    Retriever,
}

/// Identity of a single run, passed to every hook.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub run_id: Uuid,
    pub parent_run_id: Option<Uuid>,
    pub trace_id: Uuid,
    pub run_type: RunType,
    pub name: String,
    pub start_time: SystemTime,
    pub start_instant: Instant,
    pub tags: Vec<String>,
    pub metadata: BTreeMap<String, Value>,
}

impl RunContext {
    pub fn root(
        run_type: RunType,
        name: String,
        tags: Vec<String>,
        metadata: BTreeMap<String, Value>,
    ) -> Self {
        let run_id = Uuid::new_v4();
        Self {
            run_id,
            parent_run_id: None,
            trace_id: run_id,
            run_type,
            name,
            start_time: SystemTime::now(),
            start_instant: Instant::now(),
            tags,
            metadata,
        }
    }

    pub fn child(&self, run_type: RunType, name: String) -> Self {
        let run_id = Uuid::new_v4();
        Self {
            run_id,
            parent_run_id: Some(self.run_id),
            trace_id: self.trace_id,
            run_type,
            name,
            start_time: SystemTime::now(),
            start_instant: Instant::now(),
            tags: self.tags.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Lifecycle hooks fired by an agent engine.
///
/// `on_end` fires whenever a chain step completes, which for a ReAct style
/// agent means once per reasoning iteration as well as once for the final
/// answer. All other hooks are no-ops unless overridden.
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    async fn on_end(&self, ctx: &RunContext, outputs: &Value, duration_ms: u128);

    async fn on_start(&self, _ctx: &RunContext, _inputs: &Value) {}

    async fn on_error(&self, _ctx: &RunContext, _error: &Value, _duration_ms: u128) {}

    async fn on_stream_chunk(&self, _ctx: &RunContext, _chunk: &Value) {}

    async fn on_text(&self, _ctx: &RunContext, _text: &str) {}

    async fn on_agent_action(&self, _ctx: &RunContext, _action: &Value) {}

    async fn on_agent_finish(&self, _ctx: &RunContext, _finish: &Value) {}
}

#[derive(Clone, Default)]
pub struct CallbackManager {
    handlers: Vec<Arc<dyn CallbackHandler>>,
}

impl std::fmt::Debug for CallbackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackManager")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl CallbackManager {
    pub fn new(handlers: Vec<Arc<dyn CallbackHandler>>) -> Self {
        Self { handlers }
    }

    pub fn noop() -> Self {
        Self { handlers: vec![] }
    }

    pub fn is_noop(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn add_handler(&mut self, handler: Arc<dyn CallbackHandler>) {
        self.handlers.push(handler);
    }

    pub async fn on_start(&self, ctx: &RunContext, inputs: &Value) {
        for handler in &self.handlers {
            handler.on_start(ctx, inputs).await;
        }
    }

    pub async fn on_end(&self, ctx: &RunContext, outputs: &Value, duration_ms: u128) {
        for handler in &self.handlers {
            handler.on_end(ctx, outputs, duration_ms).await;
        }
    }

    pub async fn on_error(&self, ctx: &RunContext, error: &Value, duration_ms: u128) {
        for handler in &self.handlers {
            handler.on_error(ctx, error, duration_ms).await;
        }
    }

    pub async fn on_stream_chunk(&self, ctx: &RunContext, chunk: &Value) {
        for handler in &self.handlers {
            handler.on_stream_chunk(ctx, chunk).await;
        }
    }

    pub async fn on_text(&self, ctx: &RunContext, text: &str) {
        for handler in &self.handlers {
            handler.on_text(ctx, text).await;
        }
    }

    pub async fn on_agent_action(&self, ctx: &RunContext, action: &Value) {
        for handler in &self.handlers {
            handler.on_agent_action(ctx, action).await;
        }
    }

    pub async fn on_agent_finish(&self, ctx: &RunContext, finish: &Value) {
        for handler in &self.handlers {
            handler.on_agent_finish(ctx, finish).await;
        }
    }
}
