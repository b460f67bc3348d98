//! Payloads exchanged with the chat0 backend endpoints

use serde::{Deserialize, Serialize};

/// Message role in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Single message of a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of a `POST` to the CHAT endpoint
///
/// `model` is one of the display names of [`crate::models::SUPPORTED_MODELS`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: model.into(),
        }
    }
}

/// Body of a `POST` to the COMPLETION endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(default)]
    pub is_title: bool,
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub thread_id: String,
}

impl CompletionRequest {
    /// Ask the backend for a title summarizing `prompt`
    pub fn title(
        prompt: impl Into<String>,
        message_id: impl Into<String>,
        thread_id: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            is_title: true,
            message_id: message_id.into(),
            thread_id: thread_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub title: String,
    #[serde(default)]
    pub is_title: bool,
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub thread_id: String,
}

/// Body of any non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned by the HEALTH endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
