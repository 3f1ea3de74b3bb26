mod channel;
mod guild;
mod message;
mod payload;
mod user;

pub use channel::*;
pub use guild::*;
pub use message::*;
pub use payload::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::result::Result as StdResult;

pub type Result<T> = StdResult<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unknown channel {0}")]
    Channel(String),
    #[error("unknown guild {0}")]
    Guild(String),
    #[error("unknown role {0}")]
    Role(String),
    #[error("unknown recipient {0}")]
    Recipient(String),
    #[error("message has no guild id")]
    MissingGuildId,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum Event {
    Notification(NotificationEvent),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub channel: Channel,
    pub message: MessageEvent,
    pub author: User,
}
