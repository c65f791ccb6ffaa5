use crate::forms::require;
use crate::Result as CoreErrorResult;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatMessage {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("Message", &self.message)
    }
}
