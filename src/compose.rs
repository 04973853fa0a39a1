//! Builds webhook payloads from the handful of fields the tester form collects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{DiscordEmbed, DiscordPayload, Platform, SlackPayload};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmbedDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `#rrggbb`
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageDraft {
    pub platform: Platform,
    #[serde(default)]
    pub message: String,
    /// Discord only. Replaces `message` when set.
    #[serde(default)]
    pub embed: Option<EmbedDraft>,
}

impl MessageDraft {
    pub fn to_payload(&self) -> Value {
        let payload = match (self.platform, &self.embed) {
            (Platform::Slack, _) => serde_json::to_value(SlackPayload {
                text: Some(self.message.clone()),
                blocks: None,
            }),
            (Platform::Discord, None) => serde_json::to_value(DiscordPayload {
                content: Some(self.message.clone()),
                embeds: None,
            }),
            (Platform::Discord, Some(embed)) => serde_json::to_value(DiscordEmbed {
                title: Some(embed.title.clone()),
                description: Some(embed.description.clone()),
                color: Some(parse_hex_color(&embed.color)),
                url: None,
            })
            .and_then(|embed| {
                serde_json::to_value(DiscordPayload {
                    content: None,
                    embeds: Some(vec![embed]),
                })
            }),
        };
        // Plain structs of strings and integers always serialize.
        payload.unwrap_or(Value::Null)
    }
}

/// Parses `#rrggbb` (the `#` is optional) into Discord's integer color.
/// Anything else yields 0.
pub fn parse_hex_color(color: &str) -> u32 {
    let hex = color.trim().trim_start_matches('#');
    if hex.is_empty() || hex.len() > 6 {
        return 0;
    }
    u32::from_str_radix(hex, 16).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slack_draft_builds_text_payload() {
        let draft = MessageDraft {
            platform: Platform::Slack,
            message: "hello".into(),
            embed: Some(EmbedDraft::default()),
        };
        assert_eq!(draft.to_payload(), json!({ "text": "hello" }));
    }

    #[test]
    fn discord_draft_builds_content_payload() {
        let draft = MessageDraft {
            platform: Platform::Discord,
            message: "hello".into(),
            embed: None,
        };
        assert_eq!(draft.to_payload(), json!({ "content": "hello" }));
    }

    #[test]
    fn discord_embed_draft_builds_embeds_payload() {
        let draft = MessageDraft {
            platform: Platform::Discord,
            message: "ignored".into(),
            embed: Some(EmbedDraft {
                title: "Release".into(),
                description: "v1.2.0 is out".into(),
                color: "#5865F2".into(),
            }),
        };
        assert_eq!(
            draft.to_payload(),
            json!({
                "embeds": [{
                    "title": "Release",
                    "description": "v1.2.0 is out",
                    "color": 0x5865F2
                }]
            })
        );
    }

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        assert_eq!(parse_hex_color("#000000"), 0);
        assert_eq!(parse_hex_color("#ff0000"), 0xff0000);
        assert_eq!(parse_hex_color("00FF00"), 0x00ff00);
        assert_eq!(parse_hex_color(""), 0);
        assert_eq!(parse_hex_color("#zzzzzz"), 0);
        assert_eq!(parse_hex_color("#ffffffff"), 0);
    }

    #[test]
    fn draft_deserializes_from_form_json() {
        let draft: MessageDraft = serde_json::from_value(json!({
            "platform": "discord",
            "embed": { "title": "t", "description": "d", "color": "#010203" }
        }))
        .unwrap();
        assert!(draft.message.is_empty());
        assert_eq!(draft.embed.unwrap().color, "#010203");
    }
}
