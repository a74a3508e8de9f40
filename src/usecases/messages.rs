use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::messages::{
    MessageDetail, NewMessage, ReadReceipt, ReceivedMessage, SendMessageArgs, SentMessage,
};
use crate::repositories::{messages, users};

/// Store a new message after checking both participants exist.
pub async fn send<C: Context>(ctx: &C, args: SendMessageArgs) -> ServiceResult<NewMessage> {
    if args.from_username.is_empty() || args.to_username.is_empty() || args.body.is_empty() {
        return Err(AppError::MessagesMissingField);
    }

    if !users::exists(ctx, &args.from_username).await? {
        return Err(AppError::UsersNotFound);
    }
    if !users::exists(ctx, &args.to_username).await? {
        return Err(AppError::UsersNotFound);
    }

    let message_id =
        messages::create(ctx, &args.from_username, &args.to_username, &args.body).await?;
    match messages::fetch_one(ctx, message_id).await {
        Ok(message) => Ok(NewMessage::from(message)),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_detail<C: Context>(ctx: &C, message_id: u64) -> ServiceResult<MessageDetail> {
    match messages::fetch_detail(ctx, message_id).await {
        Ok(row) => Ok(MessageDetail::from(row)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MessagesNotFound),
        Err(e) => unexpected(e),
    }
}

/// Messages addressed to `username`, each with the sender's profile.
pub async fn fetch_received<C: Context>(
    ctx: &C,
    username: &str,
) -> ServiceResult<Vec<ReceivedMessage>> {
    match messages::fetch_received(ctx, username).await {
        Ok(rows) => Ok(rows.into_iter().map(ReceivedMessage::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Messages written by `username`, each with the recipient's profile.
pub async fn fetch_sent<C: Context>(ctx: &C, username: &str) -> ServiceResult<Vec<SentMessage>> {
    match messages::fetch_sent(ctx, username).await {
        Ok(rows) => Ok(rows.into_iter().map(SentMessage::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Set the read timestamp and return the updated receipt.
pub async fn mark_read<C: Context>(ctx: &C, message_id: u64) -> ServiceResult<ReadReceipt> {
    messages::mark_read(ctx, message_id).await?;
    match messages::fetch_one(ctx, message_id).await {
        Ok(message) => Ok(ReadReceipt::from(message)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MessagesNotFound),
        Err(e) => unexpected(e),
    }
}
