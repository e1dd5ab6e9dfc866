//! Chat message entity for coaching sessions.
//!
//! Messages are immutable records of what the patient and the coach said.

use serde::{Deserialize, Serialize};

use super::CoachingError;
use crate::domain::foundation::{MessageId, Timestamp};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// What kind of coaching move a message is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Message,
    Reflection,
    Question,
    Affirmation,
}

impl MessageType {
    /// Badge text for typed bot messages; plain messages have none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MessageType::Message => None,
            MessageType::Reflection => Some("Reflection"),
            MessageType::Question => Some("Question"),
            MessageType::Affirmation => Some("Affirmation"),
        }
    }
}

/// An immutable message within a coaching chat.
///
/// # Invariants
///
/// - `content` is non-blank (validated at construction)
/// - `timestamp` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    content: String,
    sender: Sender,
    timestamp: Timestamp,
    #[serde(rename = "type")]
    message_type: MessageType,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyUtterance` if content is blank
    pub fn new(
        sender: Sender,
        content: impl Into<String>,
        message_type: MessageType,
    ) -> Result<Self, CoachingError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(CoachingError::EmptyUtterance);
        }
        Ok(Self {
            id: MessageId::new(),
            content,
            sender,
            timestamp: Timestamp::now(),
            message_type,
        })
    }

    /// Creates a patient-authored message.
    pub fn user(content: impl Into<String>) -> Result<Self, CoachingError> {
        Self::new(Sender::User, content, MessageType::Message)
    }

    /// Creates a coach-authored message of the given type.
    pub fn bot(content: impl Into<String>, message_type: MessageType) -> Result<Self, CoachingError> {
        Self::new(Sender::Bot, content, message_type)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_plain_message() {
        let msg = ChatMessage::user("Hi there").unwrap();
        assert_eq!(msg.sender(), Sender::User);
        assert_eq!(msg.message_type(), MessageType::Message);
        assert!(msg.is_from_user());
    }

    #[test]
    fn blank_content_is_rejected() {
        assert_eq!(ChatMessage::user("   \n"), Err(CoachingError::EmptyUtterance));
        assert!(ChatMessage::bot("", MessageType::Question).is_err());
    }

    #[test]
    fn content_is_kept_verbatim() {
        let msg = ChatMessage::user("  I want to try  ").unwrap();
        assert_eq!(msg.content(), "  I want to try  ");
    }

    #[test]
    fn serializes_type_field_in_snake_case() {
        let msg = ChatMessage::bot("You value your family.", MessageType::Reflection).unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "reflection");
        assert_eq!(json["sender"], "bot");
    }

    #[test]
    fn labels_only_typed_messages() {
        assert_eq!(MessageType::Message.label(), None);
        assert_eq!(MessageType::Affirmation.label(), Some("Affirmation"));
    }
}
