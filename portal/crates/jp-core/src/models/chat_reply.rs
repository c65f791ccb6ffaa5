use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatReply {
    pub response: String,
    pub provider_used: String,
    pub status: String,
    pub session_id: Option<String>,
}
