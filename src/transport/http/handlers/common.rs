//! Shared handler helpers: BSON/JSON reshaping and the validated-insert path.

use crate::transport::http::types::{
    json_422, AppState, ErrorResponse, InsertResponse, ValidationErrorResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Converts a fetched document into response-safe JSON: ObjectIds become
/// plain hex strings (never the raw identifier type) and datetimes become
/// RFC 3339 strings.
pub fn document_to_json(document: Document) -> JsonValue {
    JsonValue::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

fn bson_to_json(value: Bson) -> JsonValue {
    match value {
        Bson::ObjectId(oid) => JsonValue::String(oid.to_hex()),
        Bson::DateTime(dt) => {
            JsonValue::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::String(s) => JsonValue::String(s),
        Bson::Boolean(b) => JsonValue::Bool(b),
        Bson::Int32(i) => JsonValue::from(i),
        Bson::Int64(i) => JsonValue::from(i),
        Bson::Double(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Bson::Null => JsonValue::Null,
        Bson::Document(d) => document_to_json(d),
        Bson::Array(items) => JsonValue::Array(items.into_iter().map(bson_to_json).collect()),
        other => JsonValue::String(other.to_string()),
    }
}

/// Truncates on a character boundary; error details in responses are capped.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn json_object_to_document(object: &JsonMap<String, JsonValue>) -> anyhow::Result<Document> {
    Ok(bson::serialize_to_document(&JsonValue::Object(object.clone()))?)
}

/// The shared write path: decode body, validate against the registered
/// schema, insert through the gateway.
///
/// Responses: 201 with `{id, message}`, 422 with per-field reasons, 503 with
/// a truncated diagnostic when the gateway is unavailable.
pub async fn insert_validated(
    state: &AppState,
    collection_name: &str,
    success_message: &str,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(v) => v,
        Err(e) => return json_422(e, "a JSON object").into_response(),
    };

    let Some(schema) = state.schema_registry.get(collection_name) else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: format!("No schema registered for '{}'", collection_name),
            }),
        )
            .into_response();
    };

    let normalized = match schema.validate(&payload) {
        Ok(object) => object,
        Err(violations) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse { detail: violations }),
            )
                .into_response();
        }
    };

    let document = match json_object_to_document(&normalized) {
        Ok(d) => d,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    detail: format!("Unrepresentable payload: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state
        .document_service
        .create_document(collection_name, document)
        .await
    {
        Ok(id) => (
            StatusCode::CREATED,
            Json(InsertResponse {
                id,
                message: success_message.to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                detail: format!(
                    "Database unavailable: {}",
                    truncate_chars(&format!("{:#}", e), 200)
                ),
            }),
        )
            .into_response(),
    }
}
