use async_trait::async_trait;
use tokio::sync::mpsc;

/// Delivery target for text that should reach the end user.
///
/// Implementations own their own synchronization; the relay may call
/// `send_message` from whichever task the agent engine runs hooks on.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send_message(&self, message: String);
}

/// Adapts a plain closure into a [`MessageSink`].
pub struct FnSink<F> {
    send: F,
}

impl<F> FnSink<F>
where
    F: Fn(String) + Send + Sync,
{
    pub fn new(send: F) -> Self {
        Self { send }
    }
}

#[async_trait]
impl<F> MessageSink for FnSink<F>
where
    F: Fn(String) + Send + Sync,
{
    async fn send_message(&self, message: String) {
        (self.send)(message);
    }
}

/// Hands messages to a chat transport running on another task.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::UnboundedSender<String>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl MessageSink for ChannelSink {
    async fn send_message(&self, message: String) {
        if self.sender.send(message).is_err() {
            tracing::warn!("chat transport receiver dropped; message discarded");
        }
    }
}
