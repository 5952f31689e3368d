use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{ApiError, Result};
use super::state::AppState;
use crate::core::game::{GameScore, score_ordering};
use crate::core::orchestrator::GenerationResult;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub outputs: Vec<GenerationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub user_order: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backends: usize,
}

/// `POST /api/generate`
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let prompt = match payload {
        Ok(Json(request)) => request.prompt.unwrap_or_default(),
        Err(rejection) => {
            debug!(error = %rejection, "rejected generate body");
            return Err(ApiError::PromptRequired);
        }
    };

    info!(prompt_len = prompt.len(), "generate request");
    let outputs = state
        .orchestrator
        .orchestrate(&prompt, &state.backends)
        .await?;

    Ok(Json(GenerateResponse { outputs }))
}

/// `POST /api/score`
pub async fn score(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<GameScore>> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let lineup_years: Vec<i32> = state.backends.iter().map(|backend| backend.year).collect();
    let result = score_ordering(&request.user_order, &lineup_years)?;
    debug!(score = result.score, "scored ordering");
    Ok(Json(result))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        backends: state.backends.len(),
    })
}
