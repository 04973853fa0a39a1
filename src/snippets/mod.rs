//! Source-code snippets that reproduce a webhook POST in other languages.
//!
//! Each target language is one entry in the template table: a key, a display label
//! and a pure render function. Generation never fails; an unknown language key
//! renders the JavaScript template.

mod curl;
mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;
mod rust;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::models::CodeSnippetRequest;

/// Inputs shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct SnippetInput<'a> {
    pub webhook_url: &'a str,
    pub payload: &'a Value,
}

type Render = fn(&SnippetInput<'_>) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
    Curl,
    Php,
    Go,
    Rust,
    Ruby,
    Java,
}

struct Template {
    language: Language,
    key: &'static str,
    label: &'static str,
    render: Render,
}

static TEMPLATES: [Template; 8] = [
    Template {
        language: Language::JavaScript,
        key: "javascript",
        label: "JavaScript",
        render: javascript::render,
    },
    Template {
        language: Language::Python,
        key: "python",
        label: "Python",
        render: python::render,
    },
    Template {
        language: Language::Curl,
        key: "curl",
        label: "cURL",
        render: curl::render,
    },
    Template {
        language: Language::Php,
        key: "php",
        label: "PHP",
        render: php::render,
    },
    Template {
        language: Language::Go,
        key: "go",
        label: "Go",
        render: go::render,
    },
    Template {
        language: Language::Rust,
        key: "rust",
        label: "Rust",
        render: rust::render,
    },
    Template {
        language: Language::Ruby,
        key: "ruby",
        label: "Ruby",
        render: ruby::render,
    },
    Template {
        language: Language::Java,
        key: "java",
        label: "Java",
        render: java::render,
    },
];

impl Language {
    pub const DEFAULT: Language = Language::JavaScript;

    pub fn all() -> impl Iterator<Item = Language> {
        TEMPLATES.iter().map(|t| t.language)
    }

    /// Looks up a language by key, ignoring case and surrounding whitespace.
    pub fn from_key(key: &str) -> Option<Language> {
        let key = key.trim();
        TEMPLATES
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(key))
            .map(|t| t.language)
    }

    pub fn resolve(key: &str) -> Language {
        Language::from_key(key).unwrap_or(Language::DEFAULT)
    }

    pub fn key(self) -> &'static str {
        self.template().key
    }

    pub fn label(self) -> &'static str {
        self.template().label
    }

    fn template(self) -> &'static Template {
        TEMPLATES
            .iter()
            .find(|t| t.language == self)
            .unwrap_or(&TEMPLATES[0])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub key: &'static str,
    pub label: &'static str,
}

pub fn supported_languages() -> Vec<LanguageInfo> {
    TEMPLATES
        .iter()
        .map(|t| LanguageInfo {
            key: t.key,
            label: t.label,
        })
        .collect()
}

pub fn render(language: Language, input: &SnippetInput<'_>) -> String {
    (language.template().render)(input)
}

/// Entry point used by the HTTP layer. The platform is not consulted: the
/// payload already has the platform's shape.
pub fn generate(request: &CodeSnippetRequest) -> String {
    let input = SnippetInput {
        webhook_url: &request.webhook_url,
        payload: &request.payload,
    };
    render(Language::resolve(&request.language), &input)
}

pub(crate) fn compact_json(payload: &Value) -> String {
    payload.to_string()
}

pub(crate) fn pretty_json(payload: &Value, indent: &[u8]) -> String {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent));
    if payload.serialize(&mut serializer).is_err() {
        return compact_json(payload);
    }
    String::from_utf8(out).unwrap_or_else(|_| compact_json(payload))
}
