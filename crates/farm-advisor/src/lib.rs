//! # farm-advisor
//!
//! Advisory desk for farmers' questions.
//!
//! ## Flow
//!
//! ```text
//! AdvisoryRequest { message, lang, topic }
//!        │
//!        ├── message empty ─────────────▶ "No question received"
//!        │
//!        ├── topic == "market" ─────────▶ PriceTable substring scan
//!        │                                 ├─ hit  ▶ "📊 Current market price of …"
//!        │                                 └─ miss ▶ "⚠️ Sorry, price info not available …"
//!        │
//!        └── any other topic ───────────▶ system prompt(lang, topic) + message
//!                                          └─ LlmProvider::complete (exactly once)
//! ```
//!
//! The desk holds no per-request state. The price table and the provider are
//! shared read-only across concurrent requests.

pub mod desk;
pub mod error;
pub mod market;
pub mod model;
pub mod prompt;

pub use desk::AdvisoryDesk;
pub use error::{FarmError, Result};
pub use market::{CropPrice, PriceTable};
pub use model::{Advice, AdvisoryRequest};

/// Topic that is answered from the price table instead of the model
pub const MARKET_TOPIC: &str = "market";
