use crate::settings::AppSettings;
use sqlx::{MySql, Pool};

pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<MySql>;
    fn settings(&self) -> &AppSettings;
}
