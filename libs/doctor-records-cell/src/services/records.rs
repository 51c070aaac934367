use std::collections::HashMap;

use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;

use crate::error::DoctorRecordError;
use crate::models::{CreateDoctorRequest, Doctor, DoctorDetails, DoctorSummary};

fn doctor_key(id: &str) -> String {
    format!("doctor:{}", id)
}

fn working_hours_key(id: &str) -> String {
    format!("workingHours:{}", id)
}

fn reservations_key(id: &str) -> String {
    format!("reservations:{}", id)
}

/// Redis-backed store for doctor records and their schedules.
///
/// Each doctor occupies three keys: a `doctor:<id>` hash with the profile
/// fields, a `workingHours:<id>` set of schedule labels, and a
/// `reservations:<id>` set that other services append to.
pub struct DoctorRecordService {
    pool: Pool,
}

impl std::fmt::Debug for DoctorRecordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The pooled connection type has no Debug impl, so the pool is elided.
        f.debug_struct("DoctorRecordService").finish_non_exhaustive()
    }
}

impl DoctorRecordService {
    /// Build the service on top of an existing connection pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create the connection pool from configuration and verify the store
    /// answers before the service is handed out.
    pub async fn connect(config: &AppConfig) -> Result<Self, DoctorRecordError> {
        let cfg = Config::from_url(config.redis_url.clone());
        let pool = cfg.create_pool(Some(Runtime::Tokio1))?;

        let mut conn = pool.get().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        info!("Connected to doctor record store");

        Ok(Self::new(pool))
    }

    /// Register a new doctor and return the generated id.
    pub async fn create_doctor(
        &self,
        request: CreateDoctorRequest,
    ) -> Result<String, DoctorRecordError> {
        let name = request.name.unwrap_or_default();
        let specialization = request.specialization.unwrap_or_default();

        if name.is_empty() || specialization.is_empty() || request.working_hours.is_empty() {
            return Err(DoctorRecordError::Validation(
                "name, specialization and workingHours must all be non-empty".to_string(),
            ));
        }

        let doctor = Doctor {
            id: Uuid::new_v4().to_string(),
            name,
            specialization,
        };

        let mut conn = self.get_connection().await?;

        let _: () = conn
            .hset_multiple(
                doctor_key(&doctor.id),
                &[
                    ("id", doctor.id.as_str()),
                    ("name", doctor.name.as_str()),
                    ("specialization", doctor.specialization.as_str()),
                ],
            )
            .await?;

        let _: () = conn
            .sadd(working_hours_key(&doctor.id), &request.working_hours)
            .await?;

        debug!("Created doctor record {}", doctor.id);
        Ok(doctor.id)
    }

    /// Fetch a single doctor with working hours and reservations.
    pub async fn get_doctor(&self, id: &str) -> Result<DoctorDetails, DoctorRecordError> {
        let mut conn = self.get_connection().await?;

        let exists: bool = conn.exists(doctor_key(id)).await?;
        if !exists {
            return Err(DoctorRecordError::NotFound(id.to_string()));
        }

        let fields: HashMap<String, String> = conn.hgetall(doctor_key(id)).await?;
        let working_hours: Vec<String> = conn.smembers(working_hours_key(id)).await?;
        let reservations: Vec<String> = conn.smembers(reservations_key(id)).await?;

        Ok(DoctorDetails {
            id: fields.get("id").cloned().unwrap_or_else(|| id.to_string()),
            name: fields.get("name").cloned().unwrap_or_default(),
            specialization: fields.get("specialization").cloned().unwrap_or_default(),
            working_hours,
            reservations,
        })
    }

    /// Remove a doctor together with its schedule and reservation sets.
    pub async fn delete_doctor(&self, id: &str) -> Result<(), DoctorRecordError> {
        let mut conn = self.get_connection().await?;

        let exists: bool = conn.exists(doctor_key(id)).await?;
        if !exists {
            return Err(DoctorRecordError::NotFound(id.to_string()));
        }

        // Single DEL covers the record hash and both sets together
        let keys = vec![doctor_key(id), working_hours_key(id), reservations_key(id)];
        let _: () = conn.del(keys).await?;

        debug!("Deleted doctor record {}", id);
        Ok(())
    }

    /// List every doctor with its working hours. Reservations are skipped here.
    pub async fn list_doctors(&self) -> Result<Vec<DoctorSummary>, DoctorRecordError> {
        let mut conn = self.get_connection().await?;

        let keys: Vec<String> = conn.keys("doctor:*").await?;
        let mut doctors = Vec::with_capacity(keys.len());

        for key in keys {
            let fields: HashMap<String, String> = conn.hgetall(&key).await?;
            let id = key
                .split_once(':')
                .map(|(_, rest)| rest.to_string())
                .unwrap_or_default();
            let working_hours: Vec<String> = conn.smembers(working_hours_key(&id)).await?;

            doctors.push(DoctorSummary {
                id: fields.get("id").cloned().unwrap_or(id),
                name: fields.get("name").cloned().unwrap_or_default(),
                specialization: fields.get("specialization").cloned().unwrap_or_default(),
                working_hours,
            });
        }

        Ok(doctors)
    }

    async fn get_connection(&self) -> Result<Connection, DoctorRecordError> {
        Ok(self.pool.get().await?)
    }
}
