use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Wire request for the external completion provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Provider variants disagree on the response shape: HF-style endpoints
/// return `generated_text` (sometimes wrapped in a one-element array),
/// OpenAI-style endpoints return `choices[0].message.content`. All decode
/// to one opaque text payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProviderResponseBody {
    Chat { choices: Vec<ChatChoice> },
    Generated { generated_text: String },
    GeneratedList(Vec<GeneratedText>),
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl ProviderResponseBody {
    fn into_text(self) -> Option<String> {
        match self {
            ProviderResponseBody::Chat { choices } => {
                choices.into_iter().next().map(|c| c.message.content)
            }
            ProviderResponseBody::Generated { generated_text } => Some(generated_text),
            ProviderResponseBody::GeneratedList(items) => {
                items.into_iter().next().map(|g| g.generated_text)
            }
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// HTTP 429-equivalent throttling signal; eligible for retry.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other provider failure; never retried.
    #[error("upstream failure: {0}")]
    Upstream(String),
}

/// Single request/response contract with the external completion
/// provider. Mocked in tests so the dialogue protocol can be exercised
/// without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: ProviderRequest) -> Result<String, ProviderError>;
}

pub struct HttpCompletionClient {
    client: reqwest::Client,
    api_url: String,
    access_token: SecretString,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.provider_api_url.clone(),
            access_token: config.provider_access_token.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionClient {
    async fn complete(&self, request: ProviderRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.access_token.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited(format!(
                "provider returned {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!(
                "provider returned {}",
                status
            )));
        }

        let body: ProviderResponseBody = response
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(format!("unreadable provider body: {}", e)))?;

        body.into_text()
            .ok_or_else(|| ProviderError::Upstream("provider returned no completion".to_string()))
    }
}
