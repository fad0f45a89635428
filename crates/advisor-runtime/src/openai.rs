//! OpenAI LLM Provider
//!
//! Implementation of `LlmProvider` for the OpenAI chat completions API and
//! any gateway that speaks the same request/response shape.

use advisor_core::{
    error::{AdvisorError, Result},
    message::{Message, Role},
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Public OpenAI API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI provider configuration
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// API credential (`OPENAI_API_KEY`)
    pub api_key: Option<String>,

    /// API root, e.g. `https://api.openai.com/v1`
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let base_url = lookup("OPENAI_BASE_URL")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self { api_key, base_url }
    }
}

/// OpenAI chat completions provider
///
/// Holds one `reqwest::Client` for the life of the process; clone the
/// surrounding `Arc` rather than the provider.
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    /// Create from configuration
    pub fn from_config(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("farm-advisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdvisorError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(OpenAiConfig::from_env())
    }

    /// Whether a credential is configured
    pub const fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisorError::Auth("OPENAI_API_KEY is not set".into()))
    }

    /// Build the wire request body
    fn build_request<'a>(
        messages: &'a [Message],
        options: &'a GenerationOptions,
    ) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &options.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
            temperature: options.temperature,
        }
    }

    /// Convert the wire response to a completion
    fn convert_completion(response: ChatCompletionResponse, model: &str) -> Result<Completion> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(AdvisorError::EmptyCompletion)?;
        let content = choice.message.content.ok_or(AdvisorError::EmptyCompletion)?;

        Ok(Completion {
            content,
            model: response.model.unwrap_or_else(|| model.to_string()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_wire),
        })
    }

    fn status_error(status: StatusCode, body: String) -> AdvisorError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AdvisorError::Auth(format!("{status}: {body}"))
            }
            StatusCode::TOO_MANY_REQUESTS => AdvisorError::RateLimited(body),
            _ => AdvisorError::Provider(format!("chat completions API error {status}: {body}")),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn health_check(&self) -> Result<bool> {
        let Ok(api_key) = self.api_key() else {
            tracing::warn!("OpenAI health check skipped: no API key configured");
            return Ok(false);
        };

        match self
            .client
            .get(self.endpoint("models"))
            .bearer_auth(api_key)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => Ok(true),
            Ok(response) => {
                tracing::warn!("OpenAI health check failed: HTTP {}", response.status());
                Ok(false)
            }
            Err(e) => {
                tracing::warn!("OpenAI health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let api_key = self.api_key()?;
        let request = Self::build_request(messages, options);

        tracing::debug!(
            model = %options.model,
            messages = messages.len(),
            "Sending request to chat completions API"
        );

        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdvisorError::ProviderUnavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::status_error(status, body));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| AdvisorError::Parse(e.to_string()))?;

        Self::convert_completion(parsed, &options.model)
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
