use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_models::error::AppError;

use crate::error::DoctorRecordError;
use crate::models::CreateDoctorRequest;
use crate::services::records::DoctorRecordService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(records): State<Arc<DoctorRecordService>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor_id = records.create_doctor(request).await.map_err(|e| match e {
        DoctorRecordError::Validation(_) => {
            AppError::Validation("All fields are required.".to_string())
        }
        _ => {
            error!("Failed to add doctor: {}", e);
            AppError::Storage("Error adding doctor.".to_string())
        }
    })?;

    Ok(Json(json!({
        "message": format!("Doctor with id: {} added successfully", doctor_id)
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(records): State<Arc<DoctorRecordService>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = records.get_doctor(&doctor_id).await.map_err(|e| match e {
        DoctorRecordError::NotFound(_) => AppError::NotFound("Doctor not found.".to_string()),
        _ => {
            error!("Failed to get doctor {}: {}", doctor_id, e);
            AppError::Storage("Error getting doctor.".to_string())
        }
    })?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(records): State<Arc<DoctorRecordService>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    records.delete_doctor(&doctor_id).await.map_err(|e| match e {
        DoctorRecordError::NotFound(_) => AppError::NotFound("Doctor not found.".to_string()),
        _ => {
            error!("Failed to delete doctor {}: {}", doctor_id, e);
            AppError::Storage("Error deleting doctor.".to_string())
        }
    })?;

    Ok(Json(json!({
        "message": format!("Doctor with id: {} deleted successfully", doctor_id)
    })))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(records): State<Arc<DoctorRecordService>>,
) -> Result<Json<Value>, AppError> {
    let doctors = records.list_doctors().await.map_err(|e| {
        error!("Failed to list doctors: {}", e);
        AppError::Storage("Error retrieving doctors.".to_string())
    })?;

    Ok(Json(json!(doctors)))
}
