use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::models::Platform;

/// A webhook request rejected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Webhook URL and payload are required.")]
    MissingFields,

    #[error("Slack webhook requires either text or blocks in the payload.")]
    InvalidSlackPayload,

    #[error("Discord webhook requires either content or embeds in the payload.")]
    InvalidDiscordPayload,
}

impl ValidationError {
    pub fn invalid_payload(platform: Platform) -> Self {
        match platform {
            Platform::Slack => ValidationError::InvalidSlackPayload,
            Platform::Discord => ValidationError::InvalidDiscordPayload,
        }
    }

    /// Short reason reported in the `error` field of a failed result.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Missing required fields",
            ValidationError::InvalidSlackPayload => "Invalid payload for Slack platform",
            ValidationError::InvalidDiscordPayload => "Invalid payload for Discord platform",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Resource not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::JsonParsing(_) => (StatusCode::BAD_REQUEST, "Invalid JSON"),
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Resource not found"),
        };

        tracing::warn!("Error occurred: {}", self);

        let body = Json(json!({
            "success": false,
            "message": error_message,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
