use super::{SnippetInput, compact_json};

pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r##"#!/bin/bash
# Send webhook using cURL

response_file=$(mktemp)
http_code=$(curl -s -o "$response_file" -w "%{{http_code}}" -X POST "{url}" \
  -H "Content-Type: application/json" \
  -d '{payload}')
body=$(cat "$response_file")
rm -f "$response_file"

if [ "$http_code" -ge 200 ] && [ "$http_code" -lt 300 ]; then
  echo "Webhook sent successfully"
  echo "Response: $body"
else
  echo "Failed to send webhook. HTTP Status: $http_code"
  echo "Error: $body"
  exit 1
fi
"##,
        url = input.webhook_url,
        payload = compact_json(input.payload),
    )
}
