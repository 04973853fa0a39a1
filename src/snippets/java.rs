use serde_json::Value;

use super::{SnippetInput, compact_json};

pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r#"// Send webhook using Java HttpClient (Java 11+)
import java.net.URI;
import java.net.http.HttpClient;
import java.net.http.HttpRequest;
import java.net.http.HttpResponse;
import java.time.Duration;

public class WebhookSender {{
    private static final String WEBHOOK_URL = "{url}";
    private static final String PAYLOAD = {payload};

    public static void main(String[] args) {{
        try {{
            sendWebhook();
        }} catch (Exception e) {{
            System.err.println("Error sending webhook: " + e.getMessage());
        }}
    }}

    private static void sendWebhook() throws Exception {{
        HttpClient client = HttpClient.newBuilder()
            .connectTimeout(Duration.ofSeconds(10))
            .build();

        HttpRequest request = HttpRequest.newBuilder()
            .uri(URI.create(WEBHOOK_URL))
            .header("Content-Type", "application/json")
            .POST(HttpRequest.BodyPublishers.ofString(PAYLOAD))
            .timeout(Duration.ofSeconds(30))
            .build();

        HttpResponse<String> response = client.send(request,
            HttpResponse.BodyHandlers.ofString());

        if (response.statusCode() >= 200 && response.statusCode() < 300) {{
            System.out.println("Webhook sent successfully");
            System.out.println("Response: " + response.body());
        }} else {{
            System.out.println("Failed to send webhook. Status: " + response.statusCode());
            System.out.println("Error: " + response.body());
        }}
    }}
}}
"#,
        url = input.webhook_url,
        payload = string_literal(&compact_json(input.payload)),
    )
}

/// Quotes `text` as a JSON string, whose escapes are also valid in Java.
pub(super) fn string_literal(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}
