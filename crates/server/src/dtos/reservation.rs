use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    pub car_id: Uuid,
    pub user_id: Uuid,
    pub pick_up_date_time: NaiveDateTime,
    pub drop_off_date_time: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: String,
    pub car_id: String,
    pub user_id: String,
    pub pick_up_date_time: NaiveDateTime,
    pub drop_off_date_time: NaiveDateTime,
    pub status: String,
    pub total_price: f64,
}

/// Status is one of `Pending`, `Confirmed`, `Cancelled`; anything else is
/// rejected with 400.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePriceRequest {
    pub total_price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CancelResponse {
    pub cancelled: bool,
}
