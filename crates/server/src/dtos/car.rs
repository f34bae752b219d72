use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CarResponse {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i16,
    pub daily_rate: f64,
    pub specification: Option<String>,
    pub availability: bool,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AvailabilityWindowParams {
    /// Start of the requested window, e.g. `2026-03-01T10:00:00`
    pub start: NaiveDateTime,
    /// End of the requested window
    pub end: NaiveDateTime,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAvailabilityRequest {
    pub availability: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDailyRateRequest {
    pub daily_rate: f64,
}
