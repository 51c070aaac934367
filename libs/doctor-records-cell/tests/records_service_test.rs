use assert_matches::assert_matches;
use deadpool_redis::{Config, Runtime};

use doctor_records_cell::error::DoctorRecordError;
use doctor_records_cell::models::CreateDoctorRequest;
use doctor_records_cell::services::records::DoctorRecordService;

fn unreachable_service() -> DoctorRecordService {
    let cfg = Config::from_url("redis://127.0.0.1:1");
    let pool = cfg
        .create_pool(Some(Runtime::Tokio1))
        .expect("pool config should be valid");
    DoctorRecordService::new(pool)
}

fn valid_request() -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: Some("Dr. Amina Hassan".to_string()),
        specialization: Some("Cardiology".to_string()),
        working_hours: vec!["Mon 09:00-17:00".to_string()],
    }
}

#[tokio::test]
async fn test_create_doctor_validates_before_touching_store() {
    let records = unreachable_service();

    // Every combination of a missing or blank field is rejected up front,
    // so none of these calls ever dials the closed port.
    let missing_name = CreateDoctorRequest {
        name: None,
        ..valid_request()
    };
    let result = records.create_doctor(missing_name).await;
    assert_matches!(result.unwrap_err(), DoctorRecordError::Validation(_));

    let blank_specialization = CreateDoctorRequest {
        specialization: Some(String::new()),
        ..valid_request()
    };
    let result = records.create_doctor(blank_specialization).await;
    assert_matches!(result.unwrap_err(), DoctorRecordError::Validation(_));

    let no_hours = CreateDoctorRequest {
        working_hours: vec![],
        ..valid_request()
    };
    let result = records.create_doctor(no_hours).await;
    assert_matches!(result.unwrap_err(), DoctorRecordError::Validation(_));
}

#[tokio::test]
async fn test_create_doctor_surfaces_pool_failure() {
    let records = unreachable_service();

    let result = records.create_doctor(valid_request()).await;

    assert_matches!(result.unwrap_err(), DoctorRecordError::Pool(_));
}

#[tokio::test]
async fn test_get_doctor_surfaces_pool_failure() {
    let records = unreachable_service();

    let result = records.get_doctor("0a182b46-90f1-4f00-a2a1-0f351d0f1b9f").await;

    assert_matches!(result.unwrap_err(), DoctorRecordError::Pool(_));
}

#[tokio::test]
async fn test_delete_doctor_surfaces_pool_failure() {
    let records = unreachable_service();

    let result = records
        .delete_doctor("0a182b46-90f1-4f00-a2a1-0f351d0f1b9f")
        .await;

    assert_matches!(result.unwrap_err(), DoctorRecordError::Pool(_));
}

#[tokio::test]
async fn test_list_doctors_surfaces_pool_failure() {
    let records = unreachable_service();

    let result = records.list_doctors().await;

    assert_matches!(result.unwrap_err(), DoctorRecordError::Pool(_));
}

#[tokio::test]
async fn test_connect_fails_fast_on_unreachable_store() {
    let config = shared_config::AppConfig {
        redis_url: "redis://127.0.0.1:1".to_string(),
    };

    let result = DoctorRecordService::connect(&config).await;

    assert_matches!(result.unwrap_err(), DoctorRecordError::Pool(_));
}
