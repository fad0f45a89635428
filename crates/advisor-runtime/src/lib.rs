//! # advisor-runtime
//!
//! Runtime providers for the farm advisor.
//!
//! ## Providers
//!
//! - **OpenAI** (default): OpenAI chat completions, or any gateway speaking
//!   the same `/chat/completions` contract
//! - **Mock**: scripted replies for offline runs (re-exported from `advisor-core`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::OpenAiProvider;
//!
//! let provider = OpenAiProvider::from_env()?;
//! let desk = AdvisoryDesk::new(Arc::new(provider), PriceTable::standard());
//! ```

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use advisor_core::{
    AdvisorError, Completion, GenerationOptions, LlmProvider, Message, MockProvider, Result, Role,
};
