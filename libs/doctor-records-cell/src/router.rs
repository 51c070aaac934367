use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::services::records::DoctorRecordService;

/// Routes for doctor record management, ready to nest under `/doctors`.
pub fn doctor_routes(state: Arc<DoctorRecordService>) -> Router {
    Router::new()
        .route("/", post(handlers::create_doctor))
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .with_state(state)
}
