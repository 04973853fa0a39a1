use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Discord,
    Slack,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Discord => "discord",
            Platform::Slack => "slack",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A webhook to relay, built fresh for every submission.
///
/// `webhook_url` and `payload` default to empty so that a request missing them
/// still deserializes and is rejected by the relay's own presence check.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub platform: Platform,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub payload: Option<Value>,
}

impl WebhookRequest {
    pub fn new(platform: Platform, webhook_url: impl Into<String>, payload: Value) -> Self {
        Self {
            platform,
            webhook_url: webhook_url.into(),
            payload: Some(payload),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SlackPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DiscordPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Value>>,
}

/// Embed built by the composer. Relayed embeds are not checked against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscordEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Typed view of a webhook payload, tagged by the platform it targets.
///
/// Only the fields the platform requires are read; anything else in the
/// payload, including the inner structure of blocks and embeds, is ignored
/// here and forwarded untouched by the relay.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadVariant {
    Slack(SlackPayload),
    Discord(DiscordPayload),
}

impl PayloadVariant {
    pub fn from_payload(platform: Platform, payload: &Value) -> Result<Self, serde_json::Error> {
        // Derived struct impls also accept a sequence and fill fields by position.
        if !payload.is_object() {
            return Err(serde::de::Error::custom("payload must be a JSON object"));
        }
        match platform {
            Platform::Slack => SlackPayload::deserialize(payload).map(PayloadVariant::Slack),
            Platform::Discord => DiscordPayload::deserialize(payload).map(PayloadVariant::Discord),
        }
    }

    /// Whether the payload carries something the platform will actually post.
    pub fn has_message(&self) -> bool {
        match self {
            PayloadVariant::Slack(p) => non_empty_text(&p.text) || non_empty_list(&p.blocks),
            PayloadVariant::Discord(p) => {
                non_empty_text(&p.content) || non_empty_list(&p.embeds)
            }
        }
    }
}

fn non_empty_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn non_empty_list<T>(value: &Option<Vec<T>>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_empty())
}

/// Normalized outcome of a relay call, as handed back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippetRequest {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub platform: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}
