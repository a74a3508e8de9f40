use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::models::auth::Claims;
use crate::settings::AppSettings;
use crate::usecases::tokens;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::routing::{get, post};
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;

pub mod auth;
pub mod messages;
pub mod users;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub settings: &'static AppSettings,
    pub current_user: Option<Claims>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/users", get(users::list_users))
        .route("/users/{username}", get(users::user_detail))
        .route("/users/{username}/to", get(users::messages_to))
        .route("/users/{username}/from", get(users::messages_from))
        .route("/messages", post(messages::send_message))
        .route("/messages/{id}", get(messages::message_detail))
        .route("/messages/{id}/read", post(messages::mark_read))
}

pub async fn serve(settings: &'static AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Serving on {addr}");
    axum::serve(listener, router().with_state(state)).await?;
    Ok(())
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // An invalid or absent token leaves the request anonymous; the
        // route guards decide whether that is acceptable.
        let current_user =
            bearer_token(parts).and_then(|token| tokens::verify(&state.settings.secret_key, token));
        Ok(Self {
            db: state.db.clone(),
            settings: state.settings,
            current_user,
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    fn settings(&self) -> &AppSettings {
        self.settings
    }
}
