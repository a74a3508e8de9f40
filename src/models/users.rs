use crate::entities::users::{User as UserEntity, UserProfile as UserProfileEntity};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<UserProfileEntity> for UserProfile {
    fn from(value: UserProfileEntity) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl From<UserEntity> for UserDetail {
    fn from(value: UserEntity) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            join_at: value.join_at,
            last_login_at: value.last_login_at,
        }
    }
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserProfile>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: UserDetail,
}
