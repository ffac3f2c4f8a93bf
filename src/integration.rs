// ABOUTME: Copy-ready integration snippets for a freshly issued API key
// Text only; nothing here talks to the network

use serde_json::json;

/// Languages offered on the final wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnippetLanguage {
    #[default]
    Curl,
    JavaScript,
    Python,
    HtmlWidget,
}

impl SnippetLanguage {
    pub const fn all() -> &'static [Self] {
        &[Self::Curl, Self::JavaScript, Self::Python, Self::HtmlWidget]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::HtmlWidget => "HTML widget",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Curl => Self::JavaScript,
            Self::JavaScript => Self::Python,
            Self::Python => Self::HtmlWidget,
            Self::HtmlWidget => Self::Curl,
        }
    }
}

fn sample_body() -> String {
    let body = json!({
        "message": "Hello!",
        "sessionId": null,
    });
    serde_json::to_string(&body).unwrap_or_default()
}

/// Render a snippet that sends one chat message with `api_key`
pub fn snippet(language: SnippetLanguage, api_key: &str, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    match language {
        SnippetLanguage::Curl => format!(
            "curl -X POST {base_url}/chat \\\n  -H \"Authorization: Bearer {api_key}\" \\\n  -H \"Content-Type: application/json\" \\\n  -d '{}'",
            sample_body()
        ),
        SnippetLanguage::JavaScript => format!(
            "const response = await fetch('{base_url}/chat', {{\n  method: 'POST',\n  headers: {{\n    'Authorization': 'Bearer {api_key}',\n    'Content-Type': 'application/json',\n  }},\n  body: JSON.stringify({{ message: 'Hello!', sessionId: null }}),\n}});\nconst reply = await response.json();"
        ),
        SnippetLanguage::Python => format!(
            "import requests\n\nresponse = requests.post(\n    \"{base_url}/chat\",\n    headers={{\"Authorization\": \"Bearer {api_key}\"}},\n    json={{\"message\": \"Hello!\", \"sessionId\": None}},\n)\nprint(response.json())"
        ),
        SnippetLanguage::HtmlWidget => format!(
            "<script src=\"https://cdn.chatbot.com/widget.js\"></script>\n<script>\n  ChatbotWidget.init({{\n    apiKey: '{api_key}',\n    position: 'bottom-right',\n    theme: 'light',\n    welcomeMessage: 'How can I help you today?',\n  }});\n</script>"
        ),
    }
}
