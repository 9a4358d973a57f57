//! HTTP front end (enabled with the `serve` feature).
//!
//! `GET /` serves a minimal upload form; `POST /upload` takes a multipart body
//! whose `photos` parts are the request's uploads and answers with the archive
//! as an attachment. The `UploadConfig` is injected once at startup and shared
//! read-only across requests.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ArchiveResponse, Upload, handle_upload};
use crate::core::params::UploadConfig;

/// Multipart field carrying the uploaded images.
pub const UPLOAD_FIELD: &str = "photos";

/// Upper bound on a whole `/upload` request body.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><title>augzip</title></head>
<body>
<h1>Image augmentation</h1>
<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="photos" accept="image/*" multiple>
<button type="submit">Augment</button>
</form>
</body>
</html>
"#;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Augzip(#[from] crate::Error),

    #[error("Worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServeError::Multipart(_)
            | ServeError::Augzip(crate::Error::UploadNotAllowed { .. })
            | ServeError::Augzip(crate::Error::Decode { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("Upload request failed ({}): {}", status, self);
        (status, self.to_string()).into_response()
    }
}

/// Routes for the upload service, bound to `config`.
pub fn router(config: UploadConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(Arc::new(config))
}

/// Bind `addr` and serve until the process stops.
pub async fn serve(addr: SocketAddr, config: UploadConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(config)).await
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn upload(
    State(config): State<Arc<UploadConfig>>,
    mut multipart: Multipart,
) -> Result<Response, ServeError> {
    let mut uploads = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        uploads.push(Upload::new(filename, bytes.to_vec()));
    }

    // Decoding and encoding are CPU-bound
    let response = tokio::task::spawn_blocking(move || handle_upload(&uploads, &config)).await??;
    Ok(attachment(response))
}

fn attachment(response: ArchiveResponse) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        response.file_name.replace(['"', '\\'], "_")
    );
    (
        [
            (header::CONTENT_TYPE, response.mime_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        response.body.into_inner(),
    )
        .into_response()
}
