use std::sync::Arc;

use async_trait::async_trait;
use chainrelay_core::{CallbackHandler, RunContext, Value};

use crate::{FnSink, ForwardMode, MessageSink, ReasoningFilter, RelayConfig};

/// Outcome of inspecting one chain step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Forward(String),
    /// Text present but forwarding from the chain-end hook is switched off.
    Suppressed,
    Reasoning,
    /// No string under `"text"`.
    NoText,
}

/// Chain-end callback that relays user-facing step text to a chat sink.
pub struct AgentCallbackHandler {
    sink: Arc<dyn MessageSink>,
    mode: ForwardMode,
    filter: ReasoningFilter,
}

impl std::fmt::Debug for AgentCallbackHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentCallbackHandler")
            .field("mode", &self.mode)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl AgentCallbackHandler {
    pub fn new(sink: Arc<dyn MessageSink>, config: RelayConfig) -> Self {
        Self {
            sink,
            mode: config.mode,
            filter: config.reasoning_filter(),
        }
    }

    pub fn from_fn<F>(send: F, config: RelayConfig) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self::new(Arc::new(FnSink::new(send)), config)
    }

    pub fn mode(&self) -> ForwardMode {
        self.mode
    }

    pub fn filter(&self) -> &ReasoningFilter {
        &self.filter
    }

    pub fn decide(&self, outputs: &Value) -> Decision {
        let Some(text) = outputs.get("text").and_then(Value::as_str) else {
            return Decision::NoText;
        };
        match self.mode {
            ForwardMode::Suppress => Decision::Suppressed,
            ForwardMode::Filter if self.filter.is_reasoning(text) => Decision::Reasoning,
            ForwardMode::Filter => Decision::Forward(text.to_string()),
        }
    }
}

#[async_trait]
impl CallbackHandler for AgentCallbackHandler {
    async fn on_end(&self, ctx: &RunContext, outputs: &Value, _duration_ms: u128) {
        match self.decide(outputs) {
            Decision::Forward(text) => {
                tracing::trace!(run_id = %ctx.run_id, name = %ctx.name, "forwarding step text");
                self.sink.send_message(text).await;
            }
            decision => {
                tracing::debug!(
                    run_id = %ctx.run_id,
                    name = %ctx.name,
                    mode = %self.mode,
                    ?decision,
                    "step text not forwarded"
                );
            }
        }
    }
}
