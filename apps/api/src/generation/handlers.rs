//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_post, GeneratePostRequest, GeneratePostResponse};
use crate::state::AppState;

/// POST /api/v1/posts/generate
///
/// Full generation pipeline: brand-voice resolution → system directive
/// assembly → LLM call → variant parse. Returns the generated variations and
/// token usage; nothing is persisted.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GeneratePostRequest>,
) -> Result<Json<GeneratePostResponse>, AppError> {
    let response = generate_post(state.voices.as_ref(), &state.llm, request).await?;
    Ok(Json(response))
}
