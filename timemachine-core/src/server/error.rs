//! Error responses for the HTTP boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::game::ScoreError;
use crate::core::orchestrator::OrchestrationError;

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const GENERATION_FAILED: &str = "Failed to generate outputs";

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, empty or unreadable prompt
    #[error("Prompt is required")]
    PromptRequired,

    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] ScoreError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Failure of the fan-out machinery itself
    #[error("Orchestration failed: {0}")]
    Orchestration(OrchestrationError),
}

impl From<OrchestrationError> for ApiError {
    fn from(err: OrchestrationError) -> Self {
        if err.is_validation() {
            ApiError::PromptRequired
        } else {
            ApiError::Orchestration(err)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::PromptRequired => (StatusCode::BAD_REQUEST, PROMPT_REQUIRED.to_string()),
            Self::InvalidOrder(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Orchestration(err) => {
                tracing::error!(error = %err, "generation request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILED.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
