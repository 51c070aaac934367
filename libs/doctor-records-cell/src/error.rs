use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoctorRecordError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    #[error("Redis pool setup error: {0}")]
    PoolSetup(#[from] deadpool_redis::CreatePoolError),
}
