use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Json, Response};
use serde_json::json;

use blobd_store::PersistedObject;
use blobd_types::{validate_repository_name, ObjectId};

use crate::error::ApiError;
use crate::middleware::{declared_content_type, read_body_bounded};
use crate::presenter::{present_created, present_download, ApiObjectCreated};
use crate::state::AppState;

/// PUT `/data/:repository` — store a blob under a repository namespace.
///
/// Transport guards (content type, body size) run first; the repository
/// name is validated before the store is touched, then the oid is derived
/// and the record created.
pub async fn put_object(
    State(state): State<AppState>,
    Path(repository): Path<String>,
    headers: HeaderMap,
    body: Body,
) -> Result<(StatusCode, Json<ApiObjectCreated>), ApiError> {
    let content_type = declared_content_type(&headers)?;
    let blob = read_body_bounded(body, state.config.max_blob_length).await?;

    validate_repository_name(&repository, state.config.max_repository_length)?;

    let object = PersistedObject::new(repository, blob, content_type);
    let stored = state.store.create(object)?;
    tracing::info!(
        repository = %stored.repository,
        oid = %stored.oid,
        size = stored.size,
        "stored repository object"
    );
    Ok((StatusCode::CREATED, Json(present_created(&stored))))
}

/// GET `/data/:repository/:oid` — fetch a blob by its key.
pub async fn get_object(
    State(state): State<AppState>,
    Path((repository, oid)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    // An oid that is not valid 64-char hex cannot name a stored record.
    let oid = ObjectId::from_hex(&oid).map_err(|_| ApiError::NotFound)?;
    let object = state.store.get(&repository, &oid)?;
    Ok(present_download(object))
}

/// DELETE `/data/:repository/:oid` — remove a blob by its key.
pub async fn delete_object(
    State(state): State<AppState>,
    Path((repository, oid)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let oid = ObjectId::from_hex(&oid).map_err(|_| ApiError::NotFound)?;
    state.store.delete(&repository, &oid)?;
    tracing::info!(%repository, %oid, "deleted repository object");
    Ok(StatusCode::OK)
}

/// GET `/health` — liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "name": "blobd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unmatched routes: the 404 envelope instead of an empty body.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
