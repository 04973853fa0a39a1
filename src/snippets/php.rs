use super::{SnippetInput, pretty_json};

// A nowdoc keeps the JSON verbatim; it is posted as-is.
pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r#"<?php
// Send webhook using cURL in PHP

$webhookUrl = '{url}';
$payload = <<<'JSON'
{payload}
JSON;

function sendWebhook($url, $body)
{{
    $ch = curl_init();

    curl_setopt($ch, CURLOPT_URL, $url);
    curl_setopt($ch, CURLOPT_POST, true);
    curl_setopt($ch, CURLOPT_POSTFIELDS, $body);
    curl_setopt($ch, CURLOPT_HTTPHEADER, [
        'Content-Type: application/json',
        'Content-Length: ' . strlen($body),
    ]);
    curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);

    $response = curl_exec($ch);
    if ($response === false) {{
        echo 'Error sending webhook: ' . curl_error($ch) . "\n";
        curl_close($ch);
        return false;
    }}

    $httpCode = curl_getinfo($ch, CURLINFO_HTTP_CODE);
    curl_close($ch);

    if ($httpCode >= 200 && $httpCode < 300) {{
        echo "Webhook sent successfully\n";
        echo "Response: " . $response . "\n";
        return true;
    }}

    echo "Failed to send webhook. HTTP Code: " . $httpCode . "\n";
    echo "Error: " . $response . "\n";
    return false;
}}

sendWebhook($webhookUrl, $payload);
"#,
        url = input.webhook_url,
        payload = pretty_json(input.payload, b"  "),
    )
}
