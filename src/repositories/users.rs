use crate::common::context::Context;
use crate::entities::users::{User, UserProfile};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "username, password, first_name, last_name, phone, join_at, last_login_at";
const PROFILE_FIELDS: &str = "username, first_name, last_name, phone";

pub struct CreateUserArgs<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
}

pub async fn create<C: Context>(ctx: &C, args: CreateUserArgs<'_>) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (username, password, first_name, last_name, phone, join_at, last_login_at) ",
        "VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)"
    );
    sqlx::query(QUERY)
        .bind(args.username)
        .bind(args.password_hash)
        .bind(args.first_name)
        .bind(args.last_name)
        .bind(args.phone)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn fetch_one<C: Context>(ctx: &C, username: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE username = ?"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<UserProfile>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        PROFILE_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY username"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn exists<C: Context>(ctx: &C, username: &str) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE username = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await?;
    Ok(count > 0)
}

pub async fn update_login_timestamp<C: Context>(ctx: &C, username: &str) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET last_login_at = CURRENT_TIMESTAMP WHERE username = ?"
    );
    sqlx::query(QUERY).bind(username).execute(ctx.db()).await?;
    Ok(())
}
