pub mod errors;
pub mod events;
pub mod id;

pub use errors::{CoachError, ConfigError};
pub use events::{EventBus, RenderEvent};
pub use id::{RequestId, SessionId};

pub type Result<T> = std::result::Result<T, CoachError>;
