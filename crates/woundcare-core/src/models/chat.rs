use serde::{Deserialize, Serialize};

/// A single turn in a chat session.
///
/// History is append-only and scoped to one bot instance: every processed
/// query appends a user turn and an assistant turn, in that order. It is
/// cleared on explicit reset and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ChatRole::User,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// Role of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}
