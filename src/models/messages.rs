use crate::entities::messages::{
    Message as MessageEntity, MessageDetailRow, MessageWithCounterpart,
};
use crate::models::users::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SendMessageArgs {
    pub from_username: String,
    pub to_username: String,
    pub body: String,
}

/// Listing entry for messages received by a user.
#[derive(Debug, Serialize)]
pub struct ReceivedMessage {
    pub id: u64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserProfile,
}

/// Listing entry for messages sent by a user.
#[derive(Debug, Serialize)]
pub struct SentMessage {
    pub id: u64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub to_user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct MessageDetail {
    pub id: u64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserProfile,
    pub to_user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct NewMessage {
    pub id: u64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReadReceipt {
    pub id: u64,
    pub read_at: Option<DateTime<Utc>>,
}

fn counterpart_profile(value: &MessageWithCounterpart) -> UserProfile {
    UserProfile {
        username: value.username.clone(),
        first_name: value.first_name.clone(),
        last_name: value.last_name.clone(),
        phone: value.phone.clone(),
    }
}

impl From<MessageWithCounterpart> for ReceivedMessage {
    fn from(value: MessageWithCounterpart) -> Self {
        let from_user = counterpart_profile(&value);
        Self {
            id: value.id,
            body: value.body,
            sent_at: value.sent_at,
            read_at: value.read_at,
            from_user,
        }
    }
}

impl From<MessageWithCounterpart> for SentMessage {
    fn from(value: MessageWithCounterpart) -> Self {
        let to_user = counterpart_profile(&value);
        Self {
            id: value.id,
            body: value.body,
            sent_at: value.sent_at,
            read_at: value.read_at,
            to_user,
        }
    }
}

impl From<MessageDetailRow> for MessageDetail {
    fn from(value: MessageDetailRow) -> Self {
        Self {
            id: value.id,
            body: value.body,
            sent_at: value.sent_at,
            read_at: value.read_at,
            from_user: UserProfile {
                username: value.from_username,
                first_name: value.from_first_name,
                last_name: value.from_last_name,
                phone: value.from_phone,
            },
            to_user: UserProfile {
                username: value.to_username,
                first_name: value.to_first_name,
                last_name: value.to_last_name,
                phone: value.to_phone,
            },
        }
    }
}

impl From<MessageEntity> for NewMessage {
    fn from(value: MessageEntity) -> Self {
        Self {
            id: value.id,
            from_username: value.from_username,
            to_username: value.to_username,
            body: value.body,
            sent_at: value.sent_at,
        }
    }
}

impl From<MessageEntity> for ReadReceipt {
    fn from(value: MessageEntity) -> Self {
        Self {
            id: value.id,
            read_at: value.read_at,
        }
    }
}

#[derive(Serialize)]
pub struct MessagesResponse<T> {
    pub messages: Vec<T>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: MessageDetail,
}

#[derive(Serialize)]
pub struct NewMessageResponse {
    #[serde(rename = "newMessage")]
    pub new_message: NewMessage,
}

#[derive(Serialize)]
pub struct ReadMessageResponse {
    #[serde(rename = "readMessage")]
    pub read_message: ReadReceipt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn send_envelope_uses_new_message_key() {
        let response = NewMessageResponse {
            new_message: NewMessage {
                id: 1,
                from_username: "alice".into(),
                to_username: "bob".into(),
                body: "hi".into(),
                sent_at: Utc::now(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("newMessage").is_some());
        assert_eq!(json["newMessage"]["from_username"], "alice");
    }

    #[test]
    fn read_envelope_uses_read_message_key() {
        let response = ReadMessageResponse {
            read_message: ReadReceipt {
                id: 7,
                read_at: Some(Utc::now()),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("readMessage").is_some());
        assert_eq!(json["readMessage"]["id"], 7);
    }

    #[test]
    fn unread_message_serializes_null_read_at() {
        let row = MessageWithCounterpart {
            id: 3,
            body: "hello".into(),
            sent_at: Utc::now(),
            read_at: None,
            username: "bob".into(),
            first_name: "Bob".into(),
            last_name: "Bobson".into(),
            phone: "+14155550000".into(),
        };
        let json = serde_json::to_value(ReceivedMessage::from(row)).unwrap();
        assert!(json["read_at"].is_null());
        assert_eq!(json["from_user"]["username"], "bob");
    }
}
