//! Callback surface for agent execution chains.
//!
//! An agent engine owns a [`CallbackManager`] and notifies it as runs start,
//! stream, finish and fail. Handlers implement [`CallbackHandler`], which
//! only requires the chain-end hook; every other hook defaults to a no-op.
pub mod callbacks;
mod error;
mod value;

pub use callbacks::{CallbackHandler, CallbackManager, RunContext, RunType};
pub use error::RelayError;
pub use value::{TryFromValue, Value};
