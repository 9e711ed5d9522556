// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Either `{"response": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn into_reply(self) -> Result<String> {
        match (self.error, self.response) {
            (Some(error), _) if !error.is_empty() => Err(ChatError::Backend(error)),
            (_, Some(response)) => Ok(response),
            _ => Err(ChatError::MissingResponse),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A chat bubble. User text is kept raw; bot content is already markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    User(String),
    Bot(String),
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Message::User(text.into())
    }

    pub fn bot(html: impl Into<String>) -> Self {
        Message::Bot(html.into())
    }

    pub fn sender(&self) -> Sender {
        match self {
            Message::User(_) => Sender::User,
            Message::Bot(_) => Sender::Bot,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::User(text) | Message::Bot(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins_over_response() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"response": "ok", "error": "No message provided"}"#).unwrap();
        let err = body.into_reply().unwrap_err();
        assert!(matches!(err, ChatError::Backend(msg) if msg == "No message provided"));
    }

    #[test]
    fn empty_error_is_ignored() {
        let body: ChatResponse = serde_json::from_str(r#"{"response": "hi", "error": ""}"#).unwrap();
        assert_eq!(body.into_reply().unwrap(), "hi");
    }

    #[test]
    fn missing_response_is_an_error() {
        let body: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(body.into_reply(), Err(ChatError::MissingResponse)));
    }

    #[test]
    fn request_serializes_message_field() {
        let json = serde_json::to_string(&ChatRequest { message: "hello".into() }).unwrap();
        assert_eq!(json, r#"{"message":"hello"}"#);
    }

    #[test]
    fn sender_tags() {
        assert_eq!(Message::user("a").sender().as_str(), "user");
        assert_eq!(Message::bot("b").sender(), Sender::Bot);
        assert_eq!(Message::bot("b").content(), "b");
    }
}
