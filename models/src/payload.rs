use serde::{Deserialize, Serialize};

pub const SOURCE_APP: &str = "XSOverlay-Discord-Notifications";

// Field names and types are a bit-exact contract with the overlay's parser.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub message_type: i32,
    pub index: i32,
    pub timeout: f32,
    pub height: i32,
    pub opacity: f32,
    pub volume: f32,
    pub audio_path: String,
    pub title: String,
    pub content: String,
    pub use_base64_icon: bool,
    pub icon: String,
    pub source_app: String,
}
