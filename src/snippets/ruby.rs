use super::{SnippetInput, pretty_json};

pub(super) fn render(input: &SnippetInput<'_>) -> String {
    format!(
        r##"# Send webhook using Net::HTTP
require 'net/http'
require 'json'
require 'uri'

webhook_url = '{url}'
payload = JSON.parse(<<~'JSON')
{payload}
JSON

def send_webhook(url, data)
  uri = URI.parse(url)

  http = Net::HTTP.new(uri.host, uri.port)
  http.use_ssl = uri.scheme == 'https'

  request = Net::HTTP::Post.new(uri)
  request['Content-Type'] = 'application/json'
  request.body = data.to_json

  begin
    response = http.request(request)

    if response.is_a?(Net::HTTPSuccess)
      puts 'Webhook sent successfully'
      puts "Response: #{{response.body}}"
    else
      puts "Failed to send webhook. Status: #{{response.code}}"
      puts "Error: #{{response.body}}"
    end
  rescue StandardError => e
    puts "Error sending webhook: #{{e.message}}"
  end
end

send_webhook(webhook_url, payload)
"##,
        url = input.webhook_url,
        payload = pretty_json(input.payload, b"  "),
    )
}
