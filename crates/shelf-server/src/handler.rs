use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use shelf_query::ListQuery;
use shelf_types::{Record, RecordId, RecordInput};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Info handler. Reports the diagnostic record count alongside the build.
pub async fn info_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "shelf-server",
        "version": env!("CARGO_PKG_VERSION"),
        "records": state.store.len(),
    }))
}

/// Create a record.
///
/// An existing record under the same id is replaced unconditionally —
/// callers that need create-only semantics must check existence first.
/// The server assigns `createdAt`; a client-supplied value is ignored by
/// construction, since the inbound shape has no such field.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(input): Json<RecordInput>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let record = input.into_record();
    state.store.set(record.clone())?;
    tracing::info!(id = %record.id, "record stored");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Delete a record by id. A missing id maps to 404.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, ApiError> {
    let removed = state.store.delete(&id)?;
    tracing::info!(id = %removed.id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Raw query parameters of a list request. Both are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub ordering: String,
    #[serde(default)]
    pub filtering: String,
}

/// List records, filtered and ordered.
///
/// Parameters are parsed before the store is touched, so a malformed
/// ordering clause never reaches the snapshot. A query matching nothing is
/// a 200 with an empty array.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let query = ListQuery::parse(&params.ordering, &params.filtering)?;
    let snapshot = state.store.snapshot()?;
    Ok(Json(query.apply(snapshot)))
}
