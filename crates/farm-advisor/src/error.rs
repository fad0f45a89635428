//! Error Types for Farm Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FarmError>;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Advisory provider failed: {0}")]
    Provider(#[from] advisor_core::AdvisorError),

    #[error("Invalid price table: {0}")]
    PriceTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
