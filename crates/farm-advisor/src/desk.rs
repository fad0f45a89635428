//! Advisory Desk
//!
//! Routes each question either to the price table or to the language model.

use std::sync::Arc;

use advisor_core::{GenerationOptions, LlmProvider, Message};

use crate::error::Result;
use crate::market::PriceTable;
use crate::model::{Advice, AdvisoryRequest};
use crate::prompt::advisory_prompt;

/// Stateless request handler shared by all connections
pub struct AdvisoryDesk {
    provider: Arc<dyn LlmProvider>,
    prices: PriceTable,
    generation: GenerationOptions,
}

impl AdvisoryDesk {
    /// Desk with default generation options (`gpt-4o-mini`, temperature 0.7)
    pub fn new(provider: Arc<dyn LlmProvider>, prices: PriceTable) -> Self {
        Self {
            provider,
            prices,
            generation: GenerationOptions::default(),
        }
    }

    /// Override the generation options used for delegated questions
    #[must_use]
    pub fn with_generation(mut self, generation: GenerationOptions) -> Self {
        self.generation = generation;
        self
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    pub const fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub const fn generation(&self) -> &GenerationOptions {
        &self.generation
    }

    /// Answer one request
    ///
    /// Only the delegated path can fail; every other path yields an `Advice`.
    pub async fn advise(&self, request: &AdvisoryRequest) -> Result<Advice> {
        if request.message.is_empty() {
            return Ok(Advice::NoQuestion);
        }

        if request.is_market() {
            return Ok(self.quote(&request.message));
        }

        self.delegate(request).await
    }

    /// Price-table answer for a market question
    pub fn quote(&self, message: &str) -> Advice {
        match self.prices.find_in(message) {
            Some((item, price)) => Advice::MarketPrice {
                item: item.to_string(),
                price: price.clone(),
            },
            None => Advice::PriceUnavailable,
        }
    }

    async fn delegate(&self, request: &AdvisoryRequest) -> Result<Advice> {
        let messages = [
            Message::system(advisory_prompt(&request.lang, &request.topic)),
            Message::user(request.message.as_str()),
        ];

        let completion = self.provider.complete(&messages, &self.generation).await?;

        tracing::debug!(
            provider = self.provider.name(),
            model = %completion.model,
            tokens = completion.usage.as_ref().map_or(0, |u| u.total_tokens),
            "Delegated advice received"
        );

        Ok(Advice::Generated(completion.content))
    }
}

#[cfg(test)]
mod tests {
    use advisor_core::{AdvisorError, MockProvider, Role};

    use super::*;
    use crate::error::FarmError;

    fn desk_with(provider: &Arc<MockProvider>) -> AdvisoryDesk {
        AdvisoryDesk::new(provider.clone(), PriceTable::standard())
    }

    #[tokio::test]
    async fn test_empty_message_short_circuits() {
        let provider = Arc::new(MockProvider::default());
        let desk = desk_with(&provider);

        for topic in ["market", "crop", ""] {
            let advice = desk
                .advise(&AdvisoryRequest::new("", "en", topic))
                .await
                .unwrap();
            assert_eq!(advice, Advice::NoQuestion);
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_market_lookup_never_calls_provider() {
        let provider = Arc::new(MockProvider::default());
        let desk = desk_with(&provider);

        let onion = desk
            .advise(&AdvisoryRequest::new("What is onion price today?", "en", "market"))
            .await
            .unwrap();
        assert_eq!(
            onion.into_reply(),
            "📊 Current market price of onion is ₹25 per kg."
        );

        let tomato = desk
            .advise(&AdvisoryRequest::new("TOMATOES in my mandi?", "hi", "market"))
            .await
            .unwrap();
        assert_eq!(
            tomato.into_reply(),
            "📊 Current market price of tomato is ₹35 per kg."
        );

        let wheat = desk
            .advise(&AdvisoryRequest::new("wheat rate?", "en", "market"))
            .await
            .unwrap();
        assert_eq!(wheat, Advice::PriceUnavailable);

        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_delegated_path_calls_provider_once() {
        let provider = Arc::new(MockProvider::replying("Check for nitrogen deficiency..."));
        let desk = desk_with(&provider);

        let advice = desk
            .advise(&AdvisoryRequest::new("My wheat leaves are yellowing", "en", "crop"))
            .await
            .unwrap();

        assert_eq!(advice.into_reply(), "Check for nitrogen deficiency...");
        assert_eq!(provider.call_count(), 1);

        let messages = provider.last_messages().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("requested language: en"));
        assert!(messages[0].content.contains("The topic is crop"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "My wheat leaves are yellowing");
    }

    #[tokio::test]
    async fn test_market_topic_is_case_sensitive() {
        let provider = Arc::new(MockProvider::replying("model answer"));
        let desk = desk_with(&provider);

        let advice = desk
            .advise(&AdvisoryRequest::new("onion price", "en", "Market"))
            .await
            .unwrap();

        assert_eq!(advice, Advice::Generated("model answer".into()));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = Arc::new(MockProvider::failing("insufficient_quota"));
        let desk = desk_with(&provider);

        let result = desk
            .advise(&AdvisoryRequest::new("When to irrigate?", "en", "irrigation"))
            .await;

        assert!(matches!(
            result,
            Err(FarmError::Provider(AdvisorError::Provider(_)))
        ));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_custom_generation_options() {
        let provider = Arc::new(MockProvider::default());
        let desk = desk_with(&provider)
            .with_generation(GenerationOptions::default().with_model("llama3.1"));
        assert_eq!(desk.generation().model, "llama3.1");
        assert_eq!(desk.prices().len(), 3);
    }
}
