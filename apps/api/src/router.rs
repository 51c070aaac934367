use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use doctor_records_cell::router::doctor_routes;
use doctor_records_cell::services::records::DoctorRecordService;

pub fn create_router(state: Arc<DoctorRecordService>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Records API is running!" }))
        .nest("/doctors", doctor_routes(state))
}
