use crate::domain::schema::FieldViolation;
use crate::transport::http::handlers::{health, menu, reservations};
use crate::transport::http::types::{
    DiagnosticsResponse, ErrorResponse, HealthResponse, InsertResponse, MessageResponse,
    ValidationErrorResponse,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        health::health_handler,
        health::hello_handler,
        health::test_database_handler,
        menu::get_menu_handler,
        menu::add_dish_handler,
        reservations::create_reservation_handler,
        reservations::list_reservations_handler
    ),
    components(schemas(
        MessageResponse,
        HealthResponse,
        InsertResponse,
        ErrorResponse,
        ValidationErrorResponse,
        FieldViolation,
        DiagnosticsResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/hello", get(health::hello_handler))
        .route("/test", get(health::test_database_handler))
        .route(
            "/api/menu",
            get(menu::get_menu_handler).post(menu::add_dish_handler),
        )
        .route(
            "/api/reservations",
            get(reservations::list_reservations_handler)
                .post(reservations::create_reservation_handler),
        )
        .with_state(app_state)
}
