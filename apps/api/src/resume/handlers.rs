//! Axum route handlers for the Resume API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::position::Position;
use crate::resume::extract::extract_positions;
use crate::resume::rewrite::attach_improvements;
use crate::state::AppState;

/// Response envelope shared by both resume endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct ImprovementRequest {
    pub highlight: String,
}

/// POST /resume/highlights
///
/// Multipart upload of one document. Drives the full pipeline: encode →
/// parse → extract → clean → (optionally) rewrite each highlight.
pub async fn handle_resume_highlights(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DataResponse<Vec<Position>>>, AppError> {
    let document = read_resume_field(&mut multipart).await?;

    info!("Received resume upload ({} bytes)", document.len());

    let parsed = state
        .parser
        .parse(&document, Utc::now().date_naive())
        .await?;

    let history = parsed.value.resume_data.employment_history.ok_or_else(|| {
        AppError::MalformedResponse("Parse response has no employment history".to_string())
    })?;

    let mut positions = extract_positions(&history)?;

    if state.config.rewrite_on_ingest {
        attach_improvements(
            &mut positions,
            state.rewriter.as_ref(),
            state.config.rewrite_choice_count,
        )
        .await;
    }

    Ok(Json(DataResponse { data: positions }))
}

/// POST /resume/improvement
///
/// Rewrites a single highlight on demand, decoupled from parsing.
pub async fn handle_improvement(
    State(state): State<AppState>,
    Json(request): Json<ImprovementRequest>,
) -> Result<Json<DataResponse<Vec<String>>>, AppError> {
    if request.highlight.trim().is_empty() {
        return Err(AppError::Validation("highlight cannot be empty".to_string()));
    }

    let choices = state
        .rewriter
        .rewrite(&request.highlight, state.config.rewrite_choice_count)
        .await?;

    Ok(Json(DataResponse { data: choices }))
}

/// Pulls the `resume` file field out of a multipart body.
async fn read_resume_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Unreadable file field: {e}")))?;
            if data.is_empty() {
                return Err(AppError::Validation("Uploaded document is empty".to_string()));
            }
            return Ok(data);
        }
    }

    Err(AppError::Validation(
        "Missing 'resume' file field".to_string(),
    ))
}
