use std::str::FromStr;

use crate::dtos::reservation::{
    CancelResponse, CreateReservationRequest, ReservationResponse, UpdatePriceRequest,
    UpdateStatusRequest,
};
use crate::error::into_status;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{entities::reservations, services::reservation::ReservationService};
use models::reservation_status::ReservationStatus;
use sea_orm::prelude::Uuid;

/// Request a new reservation
///
/// Admission is serialized per car: of several concurrent requests for
/// overlapping dates on the same car, exactly one is admitted and the rest
/// receive 409.
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation admitted", body = ReservationResponse),
        (status = 400, description = "Pick-up not strictly before drop-off"),
        (status = 404, description = "Car not found"),
        (status = 409, description = "Car unavailable or dates conflict with an existing reservation"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), StatusCode> {
    let reservation = state
        .engine
        .create_reservation(
            body.car_id,
            body.user_id,
            body.pick_up_date_time,
            body.drop_off_date_time,
        )
        .await
        .map_err(into_status)?;

    Ok((
        StatusCode::CREATED,
        Json(convert_domain_reservation(reservation)),
    ))
}

/// Get all reservations
#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "List of reservations retrieved successfully", body = [ReservationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, StatusCode> {
    let reservations = ReservationService::get_reservations(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(
        reservations
            .into_iter()
            .map(convert_to_reservation_response)
            .collect(),
    ))
}

/// Get a specific reservation by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationResponse),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, StatusCode> {
    let reservation = ReservationService::get_reservation_by_id(&state.db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match reservation {
        Some(reservation) => Ok(Json(convert_to_reservation_response(reservation))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Get reservations still awaiting confirmation
#[utoipa::path(
    get,
    path = "/reservations/pending",
    responses(
        (status = 200, description = "Pending reservations retrieved successfully", body = [ReservationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_pending_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, StatusCode> {
    let reservations = ReservationService::get_pending_reservations(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(
        reservations
            .into_iter()
            .map(convert_to_reservation_response)
            .collect(),
    ))
}

/// Get all reservations made by a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/reservations",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User reservations retrieved successfully", body = [ReservationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_user_reservations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ReservationResponse>>, StatusCode> {
    let reservations = ReservationService::get_user_reservations(&state.db, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(
        reservations
            .into_iter()
            .map(convert_to_reservation_response)
            .collect(),
    ))
}

/// Cancel a reservation
///
/// Sets the status to `Cancelled`; the record is kept and its date range
/// stays blocked for new admissions.
#[utoipa::path(
    post,
    path = "/reservations/{id}/cancel",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = CancelResponse),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CancelResponse>, StatusCode> {
    let cancelled = state
        .engine
        .cancel_reservation(id)
        .await
        .map_err(into_status)?;

    Ok(Json(CancelResponse { cancelled }))
}

/// Update a reservation's status
#[utoipa::path(
    put,
    path = "/reservations/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn update_reservation_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<ReservationResponse>, StatusCode> {
    let status =
        ReservationStatus::from_str(&body.status).map_err(|_| StatusCode::BAD_REQUEST)?;

    let reservation = state
        .engine
        .update_reservation_status(id, status)
        .await
        .map_err(into_status)?;

    Ok(Json(convert_domain_reservation(reservation)))
}

/// Update a reservation's total price
#[utoipa::path(
    put,
    path = "/reservations/{id}/price",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn update_reservation_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePriceRequest>,
) -> Result<Json<ReservationResponse>, StatusCode> {
    let reservation = state
        .engine
        .update_reservation_price(id, body.total_price)
        .await
        .map_err(into_status)?;

    Ok(Json(convert_domain_reservation(reservation)))
}

fn convert_to_reservation_response(reservation: reservations::Model) -> ReservationResponse {
    ReservationResponse {
        id: reservation.id.to_string(),
        car_id: reservation.car_id.to_string(),
        user_id: reservation.user_id.to_string(),
        pick_up_date_time: reservation.pick_up_date_time,
        drop_off_date_time: reservation.drop_off_date_time,
        status: reservation.status.to_string(),
        total_price: reservation.total_price,
    }
}

fn convert_domain_reservation(reservation: booking::Reservation) -> ReservationResponse {
    ReservationResponse {
        id: reservation.id.to_string(),
        car_id: reservation.car_id.to_string(),
        user_id: reservation.user_id.to_string(),
        pick_up_date_time: reservation.pick_up,
        drop_off_date_time: reservation.drop_off,
        status: reservation.status.to_string(),
        total_price: reservation.total_price,
    }
}
