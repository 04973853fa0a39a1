use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::client::ReqwestClient;
use crate::compose::MessageDraft;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{CodeSnippetRequest, HealthResponse, WebhookRequest, WebhookResult};
use crate::services::RelayService;
use crate::snippets::{self, LanguageInfo};

const MAX_BODY_BYTES: usize = 1_048_576;

#[derive(Clone)]
pub struct AppState {
    pub relay_service: RelayService<ReqwestClient>,
}

pub fn create_router(app_state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // API routes
        .route("/api/send-webhook", post(send_webhook))
        .route("/api/snippet", post(generate_snippet))
        .route("/api/languages", get(list_languages))
        .route("/api/compose", post(compose_payload))
        .fallback(not_found)
        // Apply middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(config)),
        )
        .with_state(app_state)
}

fn create_cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive {
        CorsLayer::permissive()
    } else {
        use axum::http::HeaderValue;
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("Ignoring invalid origin '{}': {e}", s);
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    if body.len() > MAX_BODY_BYTES {
        return Err(AppError::PayloadTooLarge);
    }
    Ok(serde_json::from_slice(body)?)
}

async fn send_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<(StatusCode, Json<WebhookResult>), AppError> {
    let request: WebhookRequest = parse_body(&body)?;
    let outcome = state.relay_service.send(request).await;
    Ok((outcome.status_code(), Json(outcome.into_result())))
}

async fn generate_snippet(body: Bytes) -> std::result::Result<impl IntoResponse, AppError> {
    let request: CodeSnippetRequest = parse_body(&body)?;
    debug!(language = %request.language, platform = %request.platform, "Generating snippet");
    let snippet = snippets::generate(&request);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], snippet))
}

async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(snippets::supported_languages())
}

async fn compose_payload(body: Bytes) -> std::result::Result<Json<Value>, AppError> {
    let draft: MessageDraft = parse_body(&body)?;
    Ok(Json(draft.to_payload()))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
