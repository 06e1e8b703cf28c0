//! Replays a scripted ReAct turn through the chain-end relay.
//!
//! Run with `CHAINRELAY_FORWARD_MODE=filter` to see user-facing step text
//! come through, or leave it unset to see the default suppression.
use std::collections::BTreeMap;
use std::sync::Arc;

use chainrelay::{AgentCallbackHandler, ChannelSink, RelayConfig};
use chainrelay_core::{CallbackManager, RunContext, RunType};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const SCRIPTED_STEPS: [&str; 4] = [
    "Thought: Do I need to use a tool? Yes\nAction: weather\nAction Input: Berlin",
    "Observation: 21C and clear",
    "Let me double-check the forecast for later today.",
    "It is 21C and clear in Berlin right now.",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = RelayConfig::from_env()?;
    tracing::info!(mode = %config.mode, "relay configured");

    let (sink, mut outgoing) = ChannelSink::channel();
    let transport = tokio::spawn(async move {
        let mut delivered = Vec::new();
        while let Some(message) = outgoing.recv().await {
            println!("[chat] {message}");
            delivered.push(message);
        }
        delivered
    });

    let handler = Arc::new(AgentCallbackHandler::new(Arc::new(sink), config));
    let callbacks = CallbackManager::new(vec![handler]);

    let agent = RunContext::root(
        RunType::Agent,
        "weather_agent".to_string(),
        vec!["demo".to_string()],
        BTreeMap::new(),
    );
    callbacks
        .on_start(&agent, &json!({"input": "What's the weather in Berlin?"}))
        .await;
    for (step, text) in SCRIPTED_STEPS.iter().enumerate() {
        let ctx = agent.child(RunType::Chain, format!("step_{step}"));
        callbacks.on_start(&ctx, &json!({"step": step})).await;
        callbacks.on_end(&ctx, &json!({"text": text}), 0).await;
    }
    callbacks
        .on_agent_finish(&agent, &json!({"output": SCRIPTED_STEPS[3]}))
        .await;
    drop(callbacks);

    let delivered = transport.await?;
    println!(
        "{} of {} chain steps reached the chat",
        delivered.len(),
        SCRIPTED_STEPS.len()
    );
    Ok(())
}
