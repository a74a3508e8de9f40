use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::auth::{LoginArgs, RegisterArgs};
use crate::models::users::{UserDetail, UserProfile};
use crate::repositories::users;
use crate::repositories::users::CreateUserArgs;
use crate::usecases::tokens;

pub fn hash_password(password: &str, cost: u32) -> ServiceResult<String> {
    let hash = bcrypt::hash(password, cost)?;
    Ok(hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<bool> {
    let matches = bcrypt::verify(password, password_hash)?;
    Ok(matches)
}

/// Create the user and log them in, returning a bearer token.
pub async fn register<C: Context>(ctx: &C, args: RegisterArgs) -> ServiceResult<String> {
    if args.username.is_empty() || args.password.is_empty() {
        return Err(AppError::AuthMissingCredentials);
    }

    let password_hash = hash_password(&args.password, ctx.settings().bcrypt_cost)?;
    let create_result = users::create(
        ctx,
        CreateUserArgs {
            username: &args.username,
            password_hash: &password_hash,
            first_name: &args.first_name,
            last_name: &args.last_name,
            phone: &args.phone,
        },
    )
    .await;
    match create_result {
        Ok(()) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::UsersUsernameTaken);
        }
        Err(e) => return unexpected(e),
    }

    tracing::info!("registered new user {}", args.username);
    tokens::issue(&ctx.settings().secret_key, &args.username)
}

/// Check credentials and log the user in, returning a bearer token.
pub async fn login<C: Context>(ctx: &C, args: LoginArgs) -> ServiceResult<String> {
    if args.username.is_empty() || args.password.is_empty() {
        return Err(AppError::AuthMissingCredentials);
    }

    let user = match users::fetch_one(ctx, &args.username).await {
        Ok(user) => user,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::AuthInvalidCredentials),
        Err(e) => return unexpected(e),
    };
    if !verify_password(&args.password, &user.password)? {
        return Err(AppError::AuthInvalidCredentials);
    }

    users::update_login_timestamp(ctx, &user.username).await?;
    tokens::issue(&ctx.settings().secret_key, &user.username)
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<UserProfile>> {
    match users::fetch_all(ctx).await {
        Ok(profiles) => Ok(profiles.into_iter().map(UserProfile::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, username: &str) -> ServiceResult<UserDetail> {
    match users::fetch_one(ctx, username).await {
        Ok(user) => Ok(UserDetail::from(user)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("pw", 4).unwrap();
        assert_ne!(hash, "pw");
        assert!(verify_password("pw", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("pw", 4).unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
