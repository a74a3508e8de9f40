pub mod auth;
pub mod messages;
pub mod tokens;
pub mod users;
