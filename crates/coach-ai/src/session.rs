//! Conversation session management.
//!
//! A `ConversationSession` holds the turn history and the system context
//! and performs the round trip with the model endpoint.

mod chat;
mod manager;
mod types;

pub use manager::ConversationSession;
pub use types::{SessionError, SystemContext};
