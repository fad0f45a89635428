//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use farm_advisor::AdvisoryRequest;

use crate::state::AppState;

/// Reply sent when the delegated call fails
pub const SERVER_ERROR_REPLY: &str = "Server error";

/// Reply sent when the body is not a JSON object
pub const INVALID_BODY_REPLY: &str = "Invalid request body";

const DEFAULT_LANG: &str = "en";
const DEFAULT_TOPIC: &str = "general";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub provider_connected: bool,
    pub market_items: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub message: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// A `message` may arrive as a bare JSON number; it is read as its text
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Integer(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }),
    )
}

impl ChatRequest {
    fn into_advisory(self) -> AdvisoryRequest {
        AdvisoryRequest::new(
            self.message.unwrap_or_default(),
            self.lang.unwrap_or_else(|| DEFAULT_LANG.into()),
            self.topic.unwrap_or_else(|| DEFAULT_TOPIC.into()),
        )
    }
}

/// Body of every `/chat` response, errors included
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

type ChatError = (StatusCode, Json<ChatReply>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.desk.provider();
    let provider_connected = provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: provider.name().to_string(),
        provider_connected,
        market_items: state.desk.prices().len(),
    })
}

/// Advisory chat endpoint
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    let request_id = Uuid::new_v4();

    let payload = match payload {
        Ok(Json(payload)) => payload,
        // No body to read; answered like an empty question
        Err(JsonRejection::MissingJsonContentType(_)) => {
            tracing::debug!(%request_id, "Chat body without JSON content type");
            ChatRequest::default()
        }
        Err(rejection) => {
            tracing::warn!(%request_id, "Rejected chat body: {}", rejection.body_text());
            return Err((StatusCode::BAD_REQUEST, Json(ChatReply::new(INVALID_BODY_REPLY))));
        }
    };

    let request = payload.into_advisory();
    tracing::info!(
        %request_id,
        topic = ?request.topic,
        lang = ?request.lang,
        "Chat request"
    );

    let advice = state.desk.advise(&request).await.map_err(|e| {
        tracing::error!(%request_id, "Advisory error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatReply::new(SERVER_ERROR_REPLY)),
        )
    })?;

    tracing::info!(%request_id, branch = advice.branch(), "Chat answered");

    Ok(Json(ChatReply::new(advice.into_reply())))
}
