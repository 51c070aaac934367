use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub redis_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| {
                    warn!("REDIS_URL not set, using redis://127.0.0.1:6379");
                    "redis://127.0.0.1:6379".to_string()
                }),
        }
    }
}
