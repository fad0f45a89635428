//! # advisor-core
//!
//! Provider-agnostic LLM abstraction for the farm advisor.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      AdvisoryDesk                            │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │ PriceTable  │  │   Prompt     │──│   LlmProvider       │  │
//! │  │  (static)   │  │  Builder     │  │   (Strategy)        │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait enables swapping between OpenAI, any
//! OpenAI-compatible gateway, or the scripted `MockProvider` without
//! changing the advisory logic.

pub mod error;
pub mod message;
pub mod mock;
pub mod provider;

pub use error::{AdvisorError, Result};
pub use message::{Message, Role};
pub use mock::MockProvider;
pub use provider::{Completion, GenerationOptions, LlmProvider};
