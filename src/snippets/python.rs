use super::{SnippetInput, pretty_json};

// The payload goes through json.loads so JSON literals (true, null) stay valid Python.
pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r#"# Send webhook using requests library
import json

import requests

webhook_url = '{url}'
payload = json.loads(r'''{payload}''')


def send_webhook():
    try:
        response = requests.post(
            webhook_url,
            json=payload,
            headers={{'Content-Type': 'application/json'}},
            timeout=30,
        )

        if 200 <= response.status_code < 300:
            print('Webhook sent successfully')
            print(f'Response: {{response.text}}')
        else:
            print(f'Failed to send webhook: {{response.status_code}}')
            print(f'Error: {{response.text}}')

    except requests.exceptions.RequestException as e:
        print(f'Error sending webhook: {{e}}')


if __name__ == "__main__":
    send_webhook()
"#,
        url = input.webhook_url,
        payload = pretty_json(input.payload, b"  "),
    )
}
