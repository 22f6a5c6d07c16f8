//! OpenAI-compatible chat completion client.

use serde::Deserialize;
use serde_json::json;

use crate::config::SUGGESTION_TIMEOUT;
use crate::error_handling::SuggestionError;

use super::{PageSummary, SuggestionSource, Suggester, Suggestions};

const API_KEY_ENV: &str = "OPENAI_API_KEY";
const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
const MODEL_ENV: &str = "OPENAI_MODEL";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are an SEO expert. Reply with a single JSON object with the keys \
\"title\" (at most 60 characters), \"description\" (150-160 characters), \"keywords\" (array of \
strings), \"content_improvements\" (array of strings) and \"content_score\" (integer 0-100).";

/// Suggestion client for the OpenAI chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiSuggester {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiSuggester {
    /// Creates a client from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and
    /// `OPENAI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns `SuggestionError::MissingApiKey` when the key is unset or
    /// blank.
    pub fn from_env() -> Result<Self, SuggestionError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SuggestionError::MissingApiKey(API_KEY_ENV))?;

        let mut suggester = Self::with_key(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            suggester = suggester.with_base_url(&base_url);
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            suggester = suggester.with_model(&model);
        }
        Ok(suggester)
    }

    /// Creates a client with a specific API key.
    pub fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Sets the API base URL (everything before `/chat/completions`).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    fn build_prompt(summary: &PageSummary) -> String {
        let mut prompt = format!("Analyze this page and suggest SEO improvements.\n\nURL: {}\n", summary.url);
        prompt.push_str(&format!(
            "Current title: {}\n",
            summary.title.as_deref().unwrap_or("(none)")
        ));
        prompt.push_str(&format!(
            "Current meta description: {}\n",
            summary.meta_description.as_deref().unwrap_or("(none)")
        ));
        prompt.push_str(&format!("Word count: {}\n", summary.word_count));
        if !summary.keywords.is_empty() {
            prompt.push_str(&format!("Top keywords: {}\n", summary.keywords.join(", ")));
        }
        if !summary.issues.is_empty() {
            prompt.push_str("Main issues:\n");
            for issue in &summary.issues {
                prompt.push_str(&format!("- {issue}\n"));
            }
        }
        prompt
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// The JSON object the model is asked to return.
#[derive(Deserialize)]
struct GeneratedSuggestions {
    title: String,
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    content_improvements: Vec<String>,
    #[serde(default)]
    content_score: u32,
}

/// Turns a chat completion body into suggestions.
fn parse_completion(body: &str) -> Result<Suggestions, SuggestionError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| SuggestionError::Payload(e.to_string()))?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| SuggestionError::Payload("response has no message content".to_string()))?;

    // Some models wrap the object in a fenced code block
    let content = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let generated: GeneratedSuggestions =
        serde_json::from_str(content).map_err(|e| SuggestionError::Payload(e.to_string()))?;

    Ok(Suggestions {
        title: generated.title,
        description: generated.description,
        keywords: generated.keywords,
        content_improvements: generated.content_improvements,
        content_score: generated.content_score.min(100) as u8,
        source: SuggestionSource::Generated,
    })
}

impl Suggester for OpenAiSuggester {
    async fn suggest(&self, summary: &PageSummary) -> Result<Suggestions, SuggestionError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_prompt(summary)},
            ],
            "response_format": {"type": "json_object"},
            "temperature": 0.7,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(SUGGESTION_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        parse_completion(&text)
    }
}
