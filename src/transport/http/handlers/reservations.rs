//! Reservation endpoints over the `reservation` collection.

use crate::transport::http::handlers::common::{document_to_json, insert_validated};
use crate::transport::http::types::{
    AppState, ErrorResponse, InsertResponse, ListParams, ValidationErrorResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value as JsonValue;

const DEFAULT_LIST_LIMIT: i64 = 50;

#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = Object,
    responses(
        (status = 201, description = "Reservation created", body = InsertResponse),
        (status = 422, description = "Schema violations", body = ValidationErrorResponse),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn create_reservation_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    insert_validated(&state, "reservation", "Reservation created", body).await
}

#[utoipa::path(
    get,
    path = "/api/reservations",
    params(ListParams),
    responses(
        (status = 200, description = "Reservations, newest-submitted last (empty list when the database is unavailable)", body = Vec<Object>)
    )
)]
pub async fn list_reservations_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<JsonValue>> {
    // limit=0 is passed through and means "no limit" (gateway quirk, kept).
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    match state
        .document_service
        .get_documents("reservation", None, Some(limit))
        .await
    {
        Ok(docs) => Json(docs.into_iter().map(document_to_json).collect()),
        Err(_) => Json(Vec::new()),
    }
}
