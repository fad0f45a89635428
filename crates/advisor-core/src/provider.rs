//! LLM Provider Strategy Pattern
//!
//! Defines a common interface for text-generation backends (OpenAI, any
//! OpenAI-compatible gateway, the scripted mock) so the advisory desk works
//! with any of them without code changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_core::provider::{GenerationOptions, LlmProvider};
//!
//! let provider = OpenAiProvider::from_env()?;
//! let completion = provider.complete(&messages, &GenerationOptions::default()).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Model used for delegated advisory calls unless configured otherwise
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gpt-4o-mini")
    pub model: String,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: default_temperature(),
        }
    }
}

impl GenerationOptions {
    /// Same options with a different model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text
    pub content: String,

    /// Model that generated this response
    pub model: String,

    /// Token usage statistics (if available)
    pub usage: Option<TokenUsage>,

    /// Finish reason
    pub finish_reason: Option<FinishReason>,
}

/// Token usage statistics
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reason for completion finishing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    /// Map an OpenAI-style `finish_reason` string
    pub fn from_wire(reason: &str) -> Self {
        match reason {
            "stop" => Self::Stop,
            "length" => Self::Length,
            "content_filter" => Self::ContentFilter,
            _ => Self::Other,
        }
    }
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new LLM backends.
/// The advisory desk works exclusively through this interface.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name for logs and health output
    fn name(&self) -> &str;

    /// Check if the provider is reachable and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(opts.model, "gpt-4o-mini");
    }

    #[test]
    fn test_with_model() {
        let opts = GenerationOptions::default().with_model("gpt-4o");
        assert_eq!(opts.model, "gpt-4o");
        assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_finish_reason_from_wire() {
        assert_eq!(FinishReason::from_wire("stop"), FinishReason::Stop);
        assert_eq!(FinishReason::from_wire("length"), FinishReason::Length);
        assert_eq!(FinishReason::from_wire("tool_calls"), FinishReason::Other);
    }
}
