use crate::common::env::FromEnv;
use std::env;
use std::net::IpAddr;
use std::ops::Deref;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

const DEFAULT_BCRYPT_COST: u32 = 12;

pub struct AppSettings {
    pub level: Level,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database_url: String,
    pub db_max_connections: usize,
    pub db_wait_timeout: Duration,

    pub secret_key: String,
    pub bcrypt_cost: u32,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env("LOG_LEVEL")?;
        let app_host = IpAddr::from_env("APP_HOST")?;
        let app_port = u16::from_env("APP_PORT")?;

        let database_url = env::var("DATABASE_URL")?;
        let db_max_connections = usize::from_env("DB_MAX_CONNECTIONS")?;
        let db_wait_timeout_secs = u64::from_env("DB_WAIT_TIMEOUT_SECS")?;
        let db_wait_timeout = Duration::from_secs(db_wait_timeout_secs);

        let secret_key = env::var("SECRET_KEY")?;
        let bcrypt_cost = u32::from_env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?;

        Ok(AppSettings {
            level,
            app_port,
            app_host,

            database_url,
            db_max_connections,
            db_wait_timeout,

            secret_key,
            bcrypt_cost,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
