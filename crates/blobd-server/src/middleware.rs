use axum::body::Body;
use axum::http::{header, HeaderMap};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;

use blobd_store::DEFAULT_CONTENT_TYPE;

use crate::error::ApiError;

/// Content types accepted for write bodies.
///
/// Fixed allow-list of common text, document, image, and video types.
/// Everything else is rejected before the core is invoked.
pub const SUPPORTED_CONTENT_TYPES: &[&str] = &[
    "application/json",
    "application/octet-stream",
    "application/pdf",
    "application/xml",
    "application/zip",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "image/webp",
    "text/css",
    "text/csv",
    "text/html",
    "text/markdown",
    "text/plain",
    "video/mp4",
    "video/mpeg",
    "video/webm",
];

/// Resolve the declared content type of a write request.
///
/// Media-type parameters (`; charset=...`) are ignored for the allow-list
/// match; a missing header defaults to `application/octet-stream`. An
/// unsupported type fails with [`ApiError::UnsupportedContentType`].
pub fn declared_content_type(headers: &HeaderMap) -> Result<String, ApiError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(DEFAULT_CONTENT_TYPE.to_string());
    };
    let raw = String::from_utf8_lossy(value.as_bytes());
    let media_type = raw
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if SUPPORTED_CONTENT_TYPES.contains(&media_type.as_str()) {
        Ok(media_type)
    } else {
        Err(ApiError::UnsupportedContentType(raw.trim().to_string()))
    }
}

/// Drain a request body into memory, bounded by `limit` bytes.
///
/// The stream is abandoned as soon as the accumulated size would exceed the
/// limit, so an oversized upload is cut off mid-transfer rather than
/// buffered whole. A transport failure while reading maps to a generic
/// internal error.
pub async fn read_body_bounded(body: Body, limit: usize) -> Result<Bytes, ApiError> {
    let mut stream = body.into_data_stream();
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| {
            ApiError::Internal(format!("failure when reading the request body: {err}"))
        })?;
        if buf.len() + chunk.len() > limit {
            return Err(ApiError::BodyTooLarge(limit));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}
