use super::{SnippetInput, pretty_json};

pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r##"// Add to Cargo.toml:
// [dependencies]
// reqwest = {{ version = "0.12", features = ["json"] }}
// serde_json = "1.0"
// tokio = {{ version = "1.0", features = ["full"] }}

use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {{
    let webhook_url = "{url}";
    let payload = json!({payload});

    send_webhook(webhook_url, payload).await?;
    Ok(())
}}

async fn send_webhook(url: &str, payload: serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {{
    let client = Client::new();

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {{
        println!("Webhook sent successfully");
        println!("Response: {{}}", text);
    }} else {{
        println!("Failed to send webhook. Status: {{}}", status);
        println!("Error: {{}}", text);
    }}

    Ok(())
}}
"##,
        url = input.webhook_url,
        payload = pretty_json(input.payload, b"    "),
    )
}
