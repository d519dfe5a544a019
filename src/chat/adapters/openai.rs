//! OpenAI-backed extraction and categorization adapters.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::domain::ParsedTask;
use crate::chat::ports::{ExtractorError, TaskExtractor};
use crate::task::domain::Priority;
use crate::task::ports::{Categorizer, CategorizerError};

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default extraction model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Confidence assigned when the oracle omits its own estimate.
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Fallback category used when the oracle returns an empty answer.
const FALLBACK_CATEGORY: &str = "Other";

const EXTRACTION_PROMPT: &str = "Extract task, optional due_date, and optional category. \
Always return valid JSON.\n\n\
Rules:\n\
- Extract the main task content (if unclear, use the original message)\n\
- Identify due dates (convert relative dates like \"tomorrow\", \"next week\" to ISO 8601 format)\n\
- Determine priority: high (urgent/immediate), medium (default), low (eventually)\n\
- Guess a category if possible: work, personal, shopping, health, finance, etc.\n\
- If nothing is clear, return the original message as task with nulls\n\n\
Always return this JSON structure:\n\
{\n\
  \"task\": \"task description\",\n\
  \"due_date\": \"2024-01-15T00:00:00Z\" or null,\n\
  \"priority\": \"high|medium|low\",\n\
  \"category\": \"work\" or null,\n\
  \"confidence\": 0.9\n\
}";

const CATEGORY_PROMPT: &str = "You are a task categorization assistant. \
Categorize the given task into ONE of these categories:\n\
- Work\n\
- Personal\n\
- Shopping\n\
- Health\n\
- Finance\n\
- Education\n\
- Home\n\
- Other\n\n\
Respond with ONLY the category name, nothing else.";

/// Configuration for the OpenAI adapters.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    api_key: String,
    api_url: String,
    model: String,
}

/// Error building an [`OpenAiConfig`] from the environment.
#[derive(Debug, Error)]
pub enum OpenAiConfigError {
    /// The API key environment variable is missing.
    #[error("OPENAI_API_KEY not set")]
    MissingApiKey,
}

impl OpenAiConfig {
    /// Creates a configuration with the default endpoint and model.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Overrides the chat-completions endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Overrides the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builds a configuration from environment variables.
    ///
    /// Requires `OPENAI_API_KEY`; `OPENAI_API_URL` and `OPENAI_MODEL`
    /// override the defaults when set.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiConfigError::MissingApiKey`] when `OPENAI_API_KEY` is
    /// not set.
    pub fn from_env() -> Result<Self, OpenAiConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| OpenAiConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(api_url) = std::env::var("OPENAI_API_URL") {
            config = config.with_api_url(api_url);
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config = config.with_model(model);
        }
        Ok(config)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Wire shape of the extraction oracle's JSON answer.
///
/// Every field is optional; the mapping below supplies fallbacks so a
/// partially filled answer still yields a usable projection.
#[derive(Deserialize)]
struct ExtractionWire {
    #[serde(default)]
    task: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

impl ExtractionWire {
    fn into_parsed(self, raw_text: &str) -> ParsedTask {
        let content = self
            .task
            .or(self.content)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| raw_text.to_owned());
        let priority = self
            .priority
            .as_deref()
            .and_then(|value| Priority::try_from(value).ok())
            .unwrap_or_default();

        ParsedTask {
            title: self.title,
            content,
            summary: self.summary,
            due_date: self.due_date,
            priority,
            category: self.category,
            confidence: self.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        }
    }
}

async fn complete(
    client: &Client,
    config: &OpenAiConfig,
    system: &'static str,
    user: &str,
    json_answer: bool,
) -> Result<String, String> {
    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: system.to_owned(),
            },
            ChatMessage {
                role: "user",
                content: user.to_owned(),
            },
        ],
        response_format: json_answer.then_some(ResponseFormat {
            kind: "json_object",
        }),
        temperature: 0.3,
    };

    let response = client
        .post(&config.api_url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .json(&request)
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("API error {status}: {body}"));
    }

    let completion: ChatResponse = response.json().await.map_err(|err| err.to_string())?;
    completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .ok_or_else(|| "empty completion".to_owned())
}

/// Extraction oracle backed by the OpenAI chat-completions API.
///
/// Returns errors freely; the lenient boundary upstream owns the fallback.
#[derive(Debug, Clone)]
pub struct OpenAiExtractor {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiExtractor {
    /// Creates an extractor for the given configuration.
    #[must_use]
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TaskExtractor for OpenAiExtractor {
    async fn extract(&self, text: &str) -> Result<ParsedTask, ExtractorError> {
        let answer = complete(&self.client, &self.config, EXTRACTION_PROMPT, text, true)
            .await
            .map_err(ExtractorError::Unavailable)?;
        let wire: ExtractionWire = serde_json::from_str(&answer)
            .map_err(|err| ExtractorError::MalformedResponse(err.to_string()))?;
        Ok(wire.into_parsed(text))
    }
}

/// Categorization oracle backed by the OpenAI chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenAiCategorizer {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiCategorizer {
    /// Creates a categorizer for the given configuration.
    #[must_use]
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Categorizer for OpenAiCategorizer {
    async fn categorize(&self, content: &str) -> Result<String, CategorizerError> {
        let answer = complete(&self.client, &self.config, CATEGORY_PROMPT, content, false)
            .await
            .map_err(CategorizerError::Unavailable)?;
        let category = answer.trim();
        if category.is_empty() {
            return Ok(FALLBACK_CATEGORY.to_owned());
        }
        Ok(category.to_owned())
    }
}
