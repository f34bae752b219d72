use crate::dtos::car::{
    AvailabilityWindowParams, CarResponse, UpdateAvailabilityRequest, UpdateDailyRateRequest,
};
use crate::error::into_status;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{entities::cars, services::car::CarService};
use sea_orm::prelude::Uuid;

/// Get the full fleet
#[utoipa::path(
    get,
    path = "/cars",
    responses(
        (status = 200, description = "List of cars retrieved successfully", body = [CarResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Cars"
)]
pub async fn get_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, StatusCode> {
    let cars = CarService::get_cars(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(cars.into_iter().map(convert_to_car_response).collect()))
}

/// Get a specific car by ID
#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car found", body = CarResponse),
        (status = 404, description = "Car not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Cars"
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarResponse>, StatusCode> {
    let car = CarService::get_car_by_id(&state.db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match car {
        Some(car) => Ok(Json(convert_to_car_response(car))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Which cars are free for the requested window
///
/// An empty list means no car qualifies; that is a valid answer, not a 404.
#[utoipa::path(
    get,
    path = "/cars/available",
    params(AvailabilityWindowParams),
    responses(
        (status = 200, description = "Available cars retrieved successfully", body = [CarResponse]),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Cars"
)]
pub async fn get_available_cars(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityWindowParams>,
) -> Result<Json<Vec<CarResponse>>, StatusCode> {
    let available = state
        .engine
        .available_cars(params.start, params.end)
        .await
        .map_err(into_status)?;

    // The engine works on the admission-relevant car shape; re-fetch the
    // qualifying records for the full response fields.
    let ids = available.into_iter().map(|car| car.id).collect();
    let cars = CarService::get_cars_by_ids(&state.db, ids)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(cars.into_iter().map(convert_to_car_response).collect()))
}

/// Set a car's manual availability flag
#[utoipa::path(
    put,
    path = "/cars/{id}/availability",
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Car updated", body = CarResponse),
        (status = 404, description = "Car not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Cars"
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAvailabilityRequest>,
) -> Result<Json<CarResponse>, StatusCode> {
    let car = CarService::update_availability(&state.db, id, body.availability)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match car {
        Some(car) => Ok(Json(convert_to_car_response(car))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Set a car's daily rate
#[utoipa::path(
    put,
    path = "/cars/{id}/daily-rate",
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    request_body = UpdateDailyRateRequest,
    responses(
        (status = 200, description = "Car updated", body = CarResponse),
        (status = 404, description = "Car not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Cars"
)]
pub async fn update_daily_rate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateDailyRateRequest>,
) -> Result<Json<CarResponse>, StatusCode> {
    let car = CarService::update_daily_rate(&state.db, id, body.daily_rate)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match car {
        Some(car) => Ok(Json(convert_to_car_response(car))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

fn convert_to_car_response(car: cars::Model) -> CarResponse {
    CarResponse {
        id: car.id.to_string(),
        make: car.make,
        model: car.model,
        year: car.year,
        daily_rate: car.daily_rate,
        specification: car.specification,
        availability: car.availability,
    }
}
