use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::messages::{MessagesResponse, ReceivedMessage, SentMessage};
use crate::models::users::{UserResponse, UsersResponse};
use crate::usecases::{auth, messages, users};
use axum::Json;
use axum::extract::Path;

pub async fn list_users(ctx: RequestContext) -> ServiceResponse<UsersResponse> {
    auth::require_login(ctx.current_user.as_ref())?;
    let users = users::fetch_all(&ctx).await?;
    Ok(Json(UsersResponse { users }))
}

pub async fn user_detail(
    ctx: RequestContext,
    Path(username): Path<String>,
) -> ServiceResponse<UserResponse> {
    auth::require_matching_user(ctx.current_user.as_ref(), &username)?;
    let user = users::fetch_one(&ctx, &username).await?;
    Ok(Json(UserResponse { user }))
}

pub async fn messages_to(
    ctx: RequestContext,
    Path(username): Path<String>,
) -> ServiceResponse<MessagesResponse<ReceivedMessage>> {
    auth::require_matching_user(ctx.current_user.as_ref(), &username)?;
    let messages = messages::fetch_received(&ctx, &username).await?;
    Ok(Json(MessagesResponse { messages }))
}

pub async fn messages_from(
    ctx: RequestContext,
    Path(username): Path<String>,
) -> ServiceResponse<MessagesResponse<SentMessage>> {
    auth::require_matching_user(ctx.current_user.as_ref(), &username)?;
    let messages = messages::fetch_sent(&ctx, &username).await?;
    Ok(Json(MessagesResponse { messages }))
}
