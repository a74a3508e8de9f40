use crate::settings::AppSettings;
use sqlx::{MySql, Pool};

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<MySql>,
    pub settings: &'static AppSettings,
}
