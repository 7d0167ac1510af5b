//! Axum route handlers for document export.
//!
//! Handlers only translate HTTP to render calls: pick the format, run the CPU-bound
//! render on the blocking pool, and wrap the bytes as an attachment.

use anyhow::Context;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path},
    http::header,
    response::Response,
    Json,
};
use tracing::info_span;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeSnapshot;
use crate::render::{render_document, DocumentFormat, RenderError, RenderedDocument};
use crate::sample::sample_resume;

/// POST /api/v1/export/:format
///
/// Renders the submitted snapshot as `pdf` or `docx`.
pub async fn handle_export(
    Path(format): Path<String>,
    payload: Result<Json<ResumeSnapshot>, JsonRejection>,
) -> Result<Response, AppError> {
    let format = parse_format(&format)?;
    let Json(snapshot) = payload?;
    render_attachment(snapshot, format).await
}

/// GET /api/v1/sample
pub async fn handle_get_sample() -> Json<ResumeSnapshot> {
    Json(sample_resume())
}

/// GET /api/v1/sample/export/:format
pub async fn handle_export_sample(Path(format): Path<String>) -> Result<Response, AppError> {
    let format = parse_format(&format)?;
    render_attachment(sample_resume(), format).await
}

fn parse_format(raw: &str) -> Result<DocumentFormat, AppError> {
    raw.parse::<DocumentFormat>().map_err(AppError::NotFound)
}

async fn render_attachment(
    snapshot: ResumeSnapshot,
    format: DocumentFormat,
) -> Result<Response, AppError> {
    let span = info_span!("export", render_id = %Uuid::new_v4(), format = %format);

    // CPU-bound render — spawn_blocking to avoid blocking the async executor.
    let document = tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        render_document(&snapshot, format)
    })
    .await
    .map_err(|e| RenderError::Worker(format!("spawn_blocking failed in export: {e}")))
    .and_then(|rendered| rendered)
    .map_err(|source| AppError::Render { format, source })?;

    attachment(document)
}

fn attachment(document: RenderedDocument) -> Result<Response, AppError> {
    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    let response = Response::builder()
        .header(header::CONTENT_TYPE, document.format.content_type())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(document.bytes))
        .context("failed to build attachment response")?;
    Ok(response)
}
