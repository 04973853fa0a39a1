//! Webhook tester service.
//!
//! Relays test messages to Discord and Slack webhooks and renders code
//! snippets that reproduce the same POST in other languages.

pub mod client;
pub mod compose;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod snippets;
