use serde::{Deserialize, Serialize};

/// A doctor record as stored in the backing hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
}

/// Payload for registering a new doctor.
///
/// Fields are optional at the serde level so that an absent field reaches the
/// service as `None` and is rejected there, rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub working_hours: Vec<String>,
}

/// A single doctor with schedule data, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDetails {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub working_hours: Vec<String>,
    pub reservations: Vec<String>,
}

/// List entry for a doctor. Reservations are omitted from listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub working_hours: Vec<String>,
}
