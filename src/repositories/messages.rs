use crate::common::context::Context;
use crate::entities::messages::{
    Message, MessageDetailRow, MessageParticipants, MessageWithCounterpart,
};

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "id, from_username, to_username, body, sent_at, read_at";

const COUNTERPART_FIELDS: &str =
    "m.id, m.body, m.sent_at, m.read_at, u.username, u.first_name, u.last_name, u.phone";

pub async fn create<C: Context>(
    ctx: &C,
    from_username: &str,
    to_username: &str,
    body: &str,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (from_username, to_username, body, sent_at) VALUES (?, ?, ?, CURRENT_TIMESTAMP)"
    );
    let result = sqlx::query(QUERY)
        .bind(from_username)
        .bind(to_username)
        .bind(body)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: u64) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_detail<C: Context>(ctx: &C, message_id: u64) -> sqlx::Result<MessageDetailRow> {
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.body, m.sent_at, m.read_at, ",
        "f.username AS from_username, f.first_name AS from_first_name, ",
        "f.last_name AS from_last_name, f.phone AS from_phone, ",
        "t.username AS to_username, t.first_name AS to_first_name, ",
        "t.last_name AS to_last_name, t.phone AS to_phone ",
        "FROM ",
        TABLE_NAME,
        " m INNER JOIN users f ON m.from_username = f.username ",
        "INNER JOIN users t ON m.to_username = t.username ",
        "WHERE m.id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_participants<C: Context>(
    ctx: &C,
    message_id: u64,
) -> sqlx::Result<Option<MessageParticipants>> {
    const QUERY: &str = const_str::concat!(
        "SELECT from_username, to_username FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_optional(ctx.db())
        .await
}

/// Messages sent to `username`, joined with each sender's profile.
pub async fn fetch_received<C: Context>(
    ctx: &C,
    username: &str,
) -> sqlx::Result<Vec<MessageWithCounterpart>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        COUNTERPART_FIELDS,
        " FROM ",
        TABLE_NAME,
        " m INNER JOIN users u ON m.from_username = u.username ",
        "WHERE m.to_username = ? ORDER BY m.sent_at"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_all(ctx.db())
        .await
}

/// Messages sent by `username`, joined with each recipient's profile.
pub async fn fetch_sent<C: Context>(
    ctx: &C,
    username: &str,
) -> sqlx::Result<Vec<MessageWithCounterpart>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        COUNTERPART_FIELDS,
        " FROM ",
        TABLE_NAME,
        " m INNER JOIN users u ON m.to_username = u.username ",
        "WHERE m.from_username = ? ORDER BY m.sent_at"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_all(ctx.db())
        .await
}

pub async fn mark_read<C: Context>(ctx: &C, message_id: u64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET read_at = CURRENT_TIMESTAMP WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(message_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
