//! Price table files
//!
//! JSON array of `{ "item", "rupees", "unit" }` objects, read once at startup.
//! Array order becomes table order.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{CropPrice, PriceTable};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct PriceEntry {
    item: String,
    rupees: Decimal,
    #[serde(default = "default_unit")]
    unit: String,
}

fn default_unit() -> String {
    "kg".into()
}

impl PriceTable {
    /// Parse a JSON price list
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<PriceEntry> = serde_json::from_str(json)?;
        Self::new(
            entries
                .into_iter()
                .map(|e| (e.item, CropPrice::new(e.rupees, e.unit))),
        )
    }

    /// Load a JSON price list from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), items = table.len(), "Loaded price table");
        Ok(table)
    }
}
