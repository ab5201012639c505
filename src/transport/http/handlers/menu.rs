//! Menu endpoints over the `dish` collection.

use crate::transport::http::handlers::common::{document_to_json, insert_validated};
use crate::transport::http::types::{
    AppState, ErrorResponse, InsertResponse, ValidationErrorResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "All dishes (empty list when the database is unavailable)", body = Vec<Object>)
    )
)]
pub async fn get_menu_handler(State(state): State<AppState>) -> Json<Vec<JsonValue>> {
    match state.document_service.get_documents("dish", None, None).await {
        Ok(docs) => Json(docs.into_iter().map(document_to_json).collect()),
        // If the DB isn't configured, return an empty list so the frontend still loads.
        Err(_) => Json(Vec::new()),
    }
}

#[utoipa::path(
    post,
    path = "/api/menu",
    request_body = Object,
    responses(
        (status = 201, description = "Dish added", body = InsertResponse),
        (status = 422, description = "Schema violations", body = ValidationErrorResponse),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn add_dish_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    insert_validated(&state, "dish", "Dish added", body).await
}
