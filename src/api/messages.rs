use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::messages::{
    MessageResponse, NewMessageResponse, ReadMessageResponse, SendMessageArgs,
};
use crate::usecases::{auth, messages};
use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;

pub async fn send_message(
    ctx: RequestContext,
    body: Result<Json<SendMessageArgs>, JsonRejection>,
) -> ServiceResponse<NewMessageResponse> {
    auth::require_login(ctx.current_user.as_ref())?;
    let Json(args) = body.map_err(|_| AppError::DecodingRequestFailed)?;
    let new_message = messages::send(&ctx, args).await?;
    Ok(Json(NewMessageResponse { new_message }))
}

pub async fn message_detail(
    ctx: RequestContext,
    Path(message_id): Path<u64>,
) -> ServiceResponse<MessageResponse> {
    let claims = auth::require_login(ctx.current_user.as_ref())?;
    auth::require_participant(&ctx, claims, message_id).await?;
    let message = messages::fetch_detail(&ctx, message_id).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn mark_read(
    ctx: RequestContext,
    Path(message_id): Path<u64>,
) -> ServiceResponse<ReadMessageResponse> {
    let claims = auth::require_login(ctx.current_user.as_ref())?;
    auth::require_recipient(&ctx, claims, message_id).await?;
    let read_message = messages::mark_read(&ctx, message_id).await?;
    Ok(Json(ReadMessageResponse { read_message }))
}
