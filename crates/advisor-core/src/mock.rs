//! Mock Provider
//!
//! For offline demos and testing. Answers every request with a fixed reply
//! (or a fixed failure) and records the conversations it was sent.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AdvisorError, Result};
use crate::message::Message;
use crate::provider::{Completion, FinishReason, GenerationOptions, LlmProvider};

/// Reply used when no reply is configured
pub const DEFAULT_MOCK_REPLY: &str =
    "1. Inspect the field.\n2. Test the soil.\n3. Consult your local agriculture office.";

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Fail(String),
}

/// Scripted LLM provider
#[derive(Debug)]
pub struct MockProvider {
    script: Script,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::replying(DEFAULT_MOCK_REPLY)
    }
}

impl MockProvider {
    /// Provider that always answers with `reply`
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose every call fails with a provider error
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(reason.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of completions requested so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().map_or(0, |calls| calls.len())
    }

    /// Messages sent with the most recent completion request
    pub fn last_messages(&self) -> Option<Vec<Message>> {
        self.calls.lock().ok().and_then(|calls| calls.last().cloned())
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(matches!(self.script, Script::Reply(_)))
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        tracing::debug!(
            model = %options.model,
            messages = messages.len(),
            "Mock completion requested"
        );

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        match &self.script {
            Script::Reply(reply) => Ok(Completion {
                content: reply.clone(),
                model: options.model.clone(),
                usage: None,
                finish_reason: Some(FinishReason::Stop),
            }),
            Script::Fail(reason) => Err(AdvisorError::Provider(reason.clone())),
        }
    }
}
