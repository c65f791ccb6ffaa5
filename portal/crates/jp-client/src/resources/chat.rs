use crate::client::ApiRequest;
use crate::{ClientResult, SessionStore};

use jp_core::{ChatMessage, ChatReply};

impl SessionStore {
    /// Ask the portal assistant
    pub async fn chat(&self, message: &ChatMessage) -> ClientResult<ChatReply> {
        message.validate()?;

        let request = ApiRequest::post("/chatbot/query")
            .json(message)?
            .failure_message("Assistant unavailable");

        self.dispatch(request).await
    }
}
