//! Role-tagged chat messages, serialized in the chat-completions wire shape.

use serde::{Deserialize, Serialize};

use crate::core::normalize::Normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message. Content is normalized on construction, so a `Message`
/// never carries smart quotes or non-NFC text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Normalize<Output = String>) -> Self {
        Self {
            role,
            content: content.normalized(),
        }
    }

    pub fn system(content: impl Normalize<Output = String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Normalize<Output = String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Normalize<Output = String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Copy with content re-normalized, for the outbound request batch.
    pub fn to_outbound(&self) -> Self {
        Self::new(self.role, self.content.as_str())
    }
}
