use super::{SnippetInput, pretty_json};

pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r#"package main

import (
    "bytes"
    "fmt"
    "io"
    "net/http"
)

func main() {{
    webhookURL := "{url}"
    payload := []byte(`{payload}`)

    if err := sendWebhook(webhookURL, payload); err != nil {{
        fmt.Printf("Error: %v\n", err)
    }}
}}

func sendWebhook(url string, payload []byte) error {{
    resp, err := http.Post(url, "application/json", bytes.NewBuffer(payload))
    if err != nil {{
        return fmt.Errorf("failed to send webhook: %w", err)
    }}
    defer resp.Body.Close()

    body, err := io.ReadAll(resp.Body)
    if err != nil {{
        return fmt.Errorf("failed to read response: %w", err)
    }}

    if resp.StatusCode >= 200 && resp.StatusCode < 300 {{
        fmt.Println("Webhook sent successfully")
        fmt.Printf("Response: %s\n", string(body))
    }} else {{
        fmt.Printf("Failed to send webhook. Status: %d\n", resp.StatusCode)
        fmt.Printf("Error: %s\n", string(body))
    }}

    return nil
}}
"#,
        url = input.webhook_url,
        payload = pretty_json(input.payload, b"    "),
    )
}
