//! Direct messages between platform users.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp, UserId, ValidationError};

/// Number of messages shown per inbox page.
pub const MESSAGE_PAGE_SIZE: usize = 12;

/// A direct message from one user to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier for this message
    pub id: MessageId,

    /// Sender
    pub from_user_id: UserId,

    /// Recipient
    pub to_user_id: UserId,

    /// Message text, trimmed, never empty
    pub body: String,

    /// When the message was sent
    pub created_at: Timestamp,
}

impl Message {
    /// Creates a message. The body is required after trimming.
    pub fn new(
        id: MessageId,
        from_user_id: UserId,
        to_user_id: UserId,
        body: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let body = body.into().trim().to_string();
        if body.is_empty() {
            return Err(ValidationError::empty_field("body"));
        }

        Ok(Self {
            id,
            from_user_id,
            to_user_id,
            body,
            created_at: now,
        })
    }

    /// Whether the given user sent or received this message.
    pub fn involves(&self, user_id: &UserId) -> bool {
        &self.from_user_id == user_id || &self.to_user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Construction tests

    #[test]
    fn new_message_trims_body() {
        let message = Message::new(
            MessageId::new(),
            UserId::new(),
            UserId::new(),
            "  Is Rex free on Saturday?  ",
            Timestamp::now(),
        )
        .unwrap();

        assert_eq!(message.body, "Is Rex free on Saturday?");
    }

    #[test]
    fn blank_body_is_rejected() {
        let result = Message::new(
            MessageId::new(),
            UserId::new(),
            UserId::new(),
            "   ",
            Timestamp::now(),
        );

        assert!(result.is_err());
    }

    // Participation tests

    #[test]
    fn involves_matches_both_endpoints() {
        let sender = UserId::new();
        let recipient = UserId::new();
        let message =
            Message::new(MessageId::new(), sender, recipient, "Hello", Timestamp::now()).unwrap();

        assert!(message.involves(&sender));
        assert!(message.involves(&recipient));
        assert!(!message.involves(&UserId::new()));
    }

    // Serialization tests

    #[test]
    fn message_uses_camel_case_keys() {
        let message = Message::new(
            MessageId::new(),
            UserId::new(),
            UserId::new(),
            "Hi",
            Timestamp::now(),
        )
        .unwrap();

        let json = serde_json::to_value(&message).unwrap();

        assert!(json.get("fromUserId").is_some());
        assert!(json.get("toUserId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
