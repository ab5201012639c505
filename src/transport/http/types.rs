use crate::app::document_service::DocumentService;
use crate::domain::schema::{FieldViolation, SchemaRegistry};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
    pub schema_registry: Arc<SchemaRegistry>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of a successful write: the new document id (as a string) plus a
/// human-readable confirmation.
#[derive(Serialize, Debug, ToSchema)]
pub struct InsertResponse {
    pub id: String,
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// 422 body: one entry per violated field.
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldViolation>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
pub struct ListParams {
    /// Maximum number of documents to return (0 = unlimited).
    pub limit: Option<i64>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: format!("Invalid JSON body: {} (expected: {})", err, expected),
        }),
    )
}
