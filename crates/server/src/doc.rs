use crate::routes::{cars, health, reservations, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        cars::get_cars,
        cars::get_car_by_id,
        cars::get_available_cars,
        cars::update_availability,
        cars::update_daily_rate,
        reservations::create_reservation,
        reservations::get_reservations,
        reservations::get_reservation_by_id,
        reservations::get_pending_reservations,
        reservations::get_user_reservations,
        reservations::cancel_reservation,
        reservations::update_reservation_status,
        reservations::update_reservation_price
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Cars", description = "Fleet and availability endpoints"),
        (name = "Reservations", description = "Reservation admission and lifecycle endpoints"),
    ),
    info(
        title = "Car Rental API",
        version = "1.0.0",
        description = "Car-rental reservation backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
