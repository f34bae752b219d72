mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use axum::{
    Router,
    routing::{get, post, put},
};
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection()
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let state = AppState::new(db);

    let app = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/cars", get(routes::cars::get_cars))
        .route("/cars/available", get(routes::cars::get_available_cars))
        .route("/cars/{id}", get(routes::cars::get_car_by_id))
        .route(
            "/cars/{id}/availability",
            put(routes::cars::update_availability),
        )
        .route("/cars/{id}/daily-rate", put(routes::cars::update_daily_rate))
        .route(
            "/reservations",
            post(routes::reservations::create_reservation)
                .get(routes::reservations::get_reservations),
        )
        .route(
            "/reservations/pending",
            get(routes::reservations::get_pending_reservations),
        )
        .route(
            "/reservations/{id}",
            get(routes::reservations::get_reservation_by_id),
        )
        .route(
            "/reservations/{id}/cancel",
            post(routes::reservations::cancel_reservation),
        )
        .route(
            "/reservations/{id}/status",
            put(routes::reservations::update_reservation_status),
        )
        .route(
            "/reservations/{id}/price",
            put(routes::reservations::update_reservation_price),
        )
        .route(
            "/users/{user_id}/reservations",
            get(routes::reservations::get_user_reservations),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
