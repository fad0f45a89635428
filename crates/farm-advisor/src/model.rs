//! Domain Models
//!
//! One request in, one `Advice` out. Nothing here outlives the request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MARKET_TOPIC;
use crate::market::CropPrice;

/// A farmer's question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    /// The question text; empty means no question was asked
    pub message: String,

    /// Language the answer should be written in (e.g., "en")
    pub lang: String,

    /// Advisory domain (e.g., "crop", "soil", "market")
    pub topic: String,
}

impl AdvisoryRequest {
    pub fn new(
        message: impl Into<String>,
        lang: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            lang: lang.into(),
            topic: topic.into(),
        }
    }

    /// Exact, case-sensitive match on the market topic
    pub fn is_market(&self) -> bool {
        self.topic == MARKET_TOPIC
    }
}

/// Outcome of a handled request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advice {
    /// The message was empty
    NoQuestion,

    /// A market item was found in the message
    MarketPrice { item: String, price: CropPrice },

    /// Market topic, but no known item in the message
    PriceUnavailable,

    /// Model-generated answer, unmodified
    Generated(String),
}

impl Advice {
    /// Short label for logs
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::NoQuestion => "no_question",
            Self::MarketPrice { .. } => "market_price",
            Self::PriceUnavailable => "price_unavailable",
            Self::Generated(_) => "generated",
        }
    }

    /// Reply text sent back to the farmer
    pub fn into_reply(self) -> String {
        match self {
            Self::Generated(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQuestion => write!(f, "No question received"),
            Self::MarketPrice { item, price } => {
                write!(f, "📊 Current market price of {item} is {price}.")
            }
            Self::PriceUnavailable => {
                write!(f, "⚠️ Sorry, price info not available for that item.")
            }
            Self::Generated(text) => f.write_str(text),
        }
    }
}
