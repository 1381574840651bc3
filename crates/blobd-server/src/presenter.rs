use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use blobd_store::PersistedObject;
use blobd_types::ObjectId;

/// API shape for a created repository object.
///
/// Only the oid and size are exposed; the blob and internal timestamp never
/// leave the store through this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiObjectCreated {
    pub oid: ObjectId,
    pub size: u64,
}

/// Render a stored record as the create response body.
pub fn present_created(object: &PersistedObject) -> ApiObjectCreated {
    ApiObjectCreated {
        oid: object.oid,
        size: object.size,
    }
}

/// Render a stored record as a raw download: the blob bytes under the
/// record's declared content type.
pub fn present_download(object: PersistedObject) -> Response {
    ([(header::CONTENT_TYPE, object.content_type)], object.blob).into_response()
}
