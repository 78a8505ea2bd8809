use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// One-way notification for whatever renders the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text")]
pub enum RenderEvent {
    SystemNotice(String),
    UserTurn(String),
    AssistantTurn(String),
    Error(String),
}

impl RenderEvent {
    pub fn text(&self) -> &str {
        match self {
            Self::SystemNotice(t) | Self::UserTurn(t) | Self::AssistantTurn(t) | Self::Error(t) => {
                t
            }
        }
    }
}

/// Fire-and-forget fan-out of render events.
///
/// Cloning is cheap; every clone publishes into the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<RenderEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RenderEvent> {
        self.sender.subscribe()
    }

    /// Publish an event, returning how many subscribers received it.
    pub fn publish(&self, event: RenderEvent) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!(?event, "render event dropped, no subscribers");
                0
            }
        }
    }

    pub fn notice(&self, text: impl Into<String>) -> usize {
        self.publish(RenderEvent::SystemNotice(text.into()))
    }

    pub fn error(&self, text: impl Into<String>) -> usize {
        self.publish(RenderEvent::Error(text.into()))
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
