//! Axum route handlers for the copy generation API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_copy, CopyOutcome, CopyRequest};
use crate::generation::parser::GeneratedCopy;
use crate::generation::render::{export_filename, export_text};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub brand: String,
    pub copy: GeneratedCopy,
}

/// POST /api/v1/copy/generate
///
/// Runs the generation pipeline and returns the structured copy plus the
/// tone that steered it. Blank required fields fail with 400 before any
/// model call.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CopyRequest>,
) -> Result<Json<CopyOutcome>, AppError> {
    let outcome = generate_copy(state.llm.as_ref(), &request).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/copy/export
///
/// Returns the plain-text export of a previously generated result as a
/// downloadable attachment. No server-side state is consulted; the client
/// sends the copy back.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Response {
    let filename = export_filename(&request.brand);
    let body = export_text(&request.copy);

    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
