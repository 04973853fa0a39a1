use axum::http::StatusCode;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use crate::client::{HttpClient, HttpError, HttpRequest};
use crate::error::ValidationError;
use crate::models::{PayloadVariant, WebhookRequest, WebhookResult};

pub const SUCCESS_MESSAGE: &str = "Webhook sent successfully.";

/// How a single relay call ended. Every variant is terminal; nothing is retried.
#[derive(Debug)]
pub enum RelayOutcome {
    Delivered,
    Invalid(ValidationError),
    /// The webhook endpoint answered with a non-2xx status.
    Rejected { status: StatusCode, body: String },
    Failed(HttpError),
}

impl RelayOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RelayOutcome::Delivered)
    }

    /// Status used when the outcome crosses an HTTP boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayOutcome::Delivered => StatusCode::OK,
            RelayOutcome::Invalid(_) => StatusCode::BAD_REQUEST,
            RelayOutcome::Rejected { status, .. } => *status,
            RelayOutcome::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_result(self) -> WebhookResult {
        match self {
            RelayOutcome::Delivered => WebhookResult::ok(SUCCESS_MESSAGE),
            RelayOutcome::Invalid(err) => WebhookResult::failure(err.to_string(), err.reason()),
            RelayOutcome::Rejected { body, .. } => WebhookResult::failure(
                format!("Failed to send webhook. Error: {body}"),
                body,
            ),
            RelayOutcome::Failed(err) => {
                let error = err.to_string();
                WebhookResult::failure(
                    format!("An error occurred while sending the webhook: {error}"),
                    error,
                )
            }
        }
    }
}

/// Check field presence and the platform-specific payload shape.
///
/// Returns the payload to forward. Performs no I/O.
pub fn validate(request: &WebhookRequest) -> Result<&Value, ValidationError> {
    let Some(payload) = request.payload.as_ref().filter(|p| !is_blank(p)) else {
        return Err(ValidationError::MissingFields);
    };
    if request.webhook_url.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let deliverable = PayloadVariant::from_payload(request.platform, payload)
        .map(|variant| variant.has_message())
        .unwrap_or(false);
    if !deliverable {
        return Err(ValidationError::invalid_payload(request.platform));
    }

    Ok(payload)
}

// `{}` and `[]` count as present; they fail the shape check instead.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[derive(Clone)]
pub struct RelayService<C> {
    client: C,
}

impl<C: HttpClient> RelayService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Validate and forward one webhook, making at most one outbound POST.
    pub async fn send(&self, request: WebhookRequest) -> RelayOutcome {
        let relay_id = Uuid::new_v4();
        let platform = request.platform;

        let payload = match validate(&request) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%relay_id, %platform, reason = err.reason(), "Rejected webhook request");
                return RelayOutcome::Invalid(err);
            }
        };

        let outcome = self.deliver(&request.webhook_url, payload).await;

        match &outcome {
            RelayOutcome::Delivered => {
                info!(%relay_id, %platform, "Webhook delivered");
            }
            RelayOutcome::Rejected { status, .. } => {
                warn!(%relay_id, %platform, status = status.as_u16(), "Webhook endpoint rejected payload");
            }
            RelayOutcome::Failed(err) => {
                warn!(%relay_id, %platform, error = %err, "Webhook delivery failed");
            }
            RelayOutcome::Invalid(_) => {}
        }

        outcome
    }

    async fn deliver(&self, webhook_url: &str, payload: &Value) -> RelayOutcome {
        let url = match Url::parse(webhook_url.trim()) {
            Ok(url) => url,
            Err(e) => return RelayOutcome::Failed(HttpError::InvalidUrl(e.to_string())),
        };

        // The URL path carries the webhook secret, so only the host is logged.
        tracing::debug!(host = url.host_str().unwrap_or_default(), "Posting webhook");

        let request = HttpRequest::post(url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(payload.to_string().into_bytes());

        match self.client.request(request).await {
            Ok(response) if response.is_success() => RelayOutcome::Delivered,
            Ok(response) => RelayOutcome::Rejected {
                status: response.status,
                body: response.body_text(),
            },
            Err(err) => RelayOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod tests;
