use super::{SnippetInput, pretty_json};

pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r#"// Send webhook using fetch API
const webhookUrl = '{url}';
const payload = {payload};

async function sendWebhook() {{
  try {{
    const response = await fetch(webhookUrl, {{
      method: 'POST',
      headers: {{
        'Content-Type': 'application/json',
      }},
      body: JSON.stringify(payload),
    }});

    if (response.ok) {{
      console.log('Webhook sent successfully');
      const result = await response.text();
      console.log('Response:', result);
    }} else {{
      console.error('Failed to send webhook:', response.status);
      console.error('Error:', await response.text());
    }}
  }} catch (error) {{
    console.error('Error sending webhook:', error);
  }}
}}

sendWebhook();
"#,
        url = input.webhook_url,
        payload = pretty_json(input.payload, b"  "),
    )
}
