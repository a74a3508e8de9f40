use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::auth::{LoginArgs, RegisterArgs, TokenResponse};
use crate::usecases::users;
use axum::Json;
use axum::extract::rejection::JsonRejection;

pub async fn login(
    ctx: RequestContext,
    body: Result<Json<LoginArgs>, JsonRejection>,
) -> ServiceResponse<TokenResponse> {
    let Json(args) = body.map_err(|_| AppError::DecodingRequestFailed)?;
    let token = users::login(&ctx, args).await?;
    Ok(Json(TokenResponse { token }))
}

pub async fn register(
    ctx: RequestContext,
    body: Result<Json<RegisterArgs>, JsonRejection>,
) -> ServiceResponse<TokenResponse> {
    let Json(args) = body.map_err(|_| AppError::DecodingRequestFailed)?;
    let token = users::register(&ctx, args).await?;
    Ok(Json(TokenResponse { token }))
}
