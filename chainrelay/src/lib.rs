//! Chain-end relay for chat surfaces.
//!
//! A ReAct agent fires its chain-end hook once per reasoning iteration, not
//! once per answer. [`AgentCallbackHandler`] sits on that hook and decides
//! whether step text is something the user should see.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chainrelay::{AgentCallbackHandler, ChannelSink, RelayConfig};
//! use chainrelay_core::CallbackManager;
//!
//! let (sink, _outgoing) = ChannelSink::channel();
//! let handler = AgentCallbackHandler::new(Arc::new(sink), RelayConfig::filtering());
//! let callbacks = CallbackManager::new(vec![Arc::new(handler)]);
//! # let _ = callbacks;
//! ```
mod config;
mod error;
mod handler;
mod reasoning;
mod sink;

pub use config::{ForwardMode, RelayConfig, EXTRA_PATTERNS_ENV, MODE_ENV};
pub use error::ConfigError;
pub use handler::{AgentCallbackHandler, Decision};
pub use reasoning::{is_agent_reasoning, ReasoningFilter, REASONING_PATTERNS};
pub use sink::{ChannelSink, FnSink, MessageSink};
