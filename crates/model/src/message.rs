use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Who a message is attributed to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the user.
    User,
    /// An answer from the service.
    Assistant,
    /// A notice produced by the client itself.
    System,
}

impl Role {
    /// Returns the lowercase name of the role, as used on the wire.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn of the conversation.
///
/// Messages are immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Creates a message with the given role and content.
    #[inline]
    pub fn new<S: Into<String>>(role: Role, content: S) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[inline]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Creates a system message.
    #[inline]
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self::new(Role::System, content)
    }

    /// Returns the role of this message.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content of this message.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_format() {
        let msg = Message::assistant("Hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "role": "assistant", "content": "Hi" })
        );

        let msg: Message = serde_json::from_value(
            json!({ "role": "system", "content": "reset" }),
        )
        .unwrap();
        assert_eq!(msg.role(), Role::System);
        assert_eq!(msg.content(), "reset");
    }

    #[test]
    fn test_unknown_role() {
        let result = serde_json::from_value::<Message>(
            json!({ "role": "tool", "content": "x" }),
        );
        assert!(result.is_err());
    }
}
