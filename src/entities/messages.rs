use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Message {
    pub id: u64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Message joined with the profile of the user on the other end,
/// as returned by the inbox/outbox listings.
#[derive(Debug, FromRow)]
pub struct MessageWithCounterpart {
    pub id: u64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Full detail row with both participant profiles joined in.
#[derive(Debug, FromRow)]
pub struct MessageDetailRow {
    pub id: u64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_username: String,
    pub from_first_name: String,
    pub from_last_name: String,
    pub from_phone: String,
    pub to_username: String,
    pub to_first_name: String,
    pub to_last_name: String,
    pub to_phone: String,
}

#[derive(Debug, FromRow)]
pub struct MessageParticipants {
    pub from_username: String,
    pub to_username: String,
}
