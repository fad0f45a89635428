//! Market Prices
//!
//! The static crop price table answered for the `market` topic. Uses
//! `rust_decimal` for amounts.

mod loader;

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{FarmError, Result};

/// Price of one crop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPrice {
    /// Amount in rupees
    pub rupees: Decimal,

    /// Quantity the amount buys (e.g., "kg")
    pub unit: String,
}

impl CropPrice {
    pub fn new(rupees: Decimal, unit: impl Into<String>) -> Self {
        Self {
            rupees,
            unit: unit.into(),
        }
    }

    pub fn per_kg(rupees: Decimal) -> Self {
        Self::new(rupees, "kg")
    }
}

impl fmt::Display for CropPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{} per {}", self.rupees, self.unit)
    }
}

/// Ordered crop-name → price table
///
/// Keys are lowercase and unique. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    entries: Vec<(String, CropPrice)>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PriceTable {
    /// Built-in daily prices
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ("tomato".into(), CropPrice::per_kg(dec!(35))),
                ("onion".into(), CropPrice::per_kg(dec!(25))),
                ("potato".into(), CropPrice::per_kg(dec!(20))),
            ],
        }
    }

    /// Build a table from entries, in the given order
    ///
    /// Item names are trimmed and lowercased. Rejects empty names, duplicate
    /// names, empty units and negative prices.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, CropPrice)>) -> Result<Self> {
        let mut table = Self {
            entries: Vec::new(),
        };

        for (item, price) in entries {
            let item = item.into().trim().to_lowercase();

            if item.is_empty() {
                return Err(FarmError::PriceTable("item name is empty".into()));
            }
            if table.get(&item).is_some() {
                return Err(FarmError::PriceTable(format!("duplicate item '{item}'")));
            }
            if price.unit.trim().is_empty() {
                return Err(FarmError::PriceTable(format!("item '{item}' has no unit")));
            }
            if price.rupees.is_sign_negative() {
                return Err(FarmError::PriceTable(format!(
                    "item '{item}' has negative price {}",
                    price.rupees
                )));
            }

            table.entries.push((item, price));
        }

        Ok(table)
    }

    /// Exact lookup by lowercase item name
    pub fn get(&self, item: &str) -> Option<&CropPrice> {
        self.entries
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, price)| price)
    }

    /// First item, in table order, that occurs anywhere in `message`
    ///
    /// Plain substring match on the lowercased message: "tomatoes" matches
    /// "tomato".
    pub fn find_in(&self, message: &str) -> Option<(&str, &CropPrice)> {
        let lower = message.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| lower.contains(name.as_str()))
            .map(|(name, price)| (name.as_str(), price))
    }

    /// Item names in table order
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_prices() {
        let table = PriceTable::standard();
        assert_eq!(table.items().collect::<Vec<_>>(), ["tomato", "onion", "potato"]);
        assert_eq!(table.get("tomato").unwrap().to_string(), "₹35 per kg");
        assert_eq!(table.get("onion").unwrap().to_string(), "₹25 per kg");
        assert_eq!(table.get("potato").unwrap().to_string(), "₹20 per kg");
    }

    #[test]
    fn test_find_is_case_insensitive_substring() {
        let table = PriceTable::standard();

        let (item, price) = table.find_in("What is ONION price today?").unwrap();
        assert_eq!(item, "onion");
        assert_eq!(price.rupees, dec!(25));

        // Plurals and compounds match too
        assert_eq!(table.find_in("price of tomatoes?").unwrap().0, "tomato");
        assert_eq!(table.find_in("sweetpotato rates").unwrap().0, "potato");

        assert!(table.find_in("wheat price").is_none());
        assert!(table.find_in("").is_none());
    }

    #[test]
    fn test_first_item_in_table_order_wins() {
        let table = PriceTable::standard();
        let (item, _) = table.find_in("potato or tomato, which is cheaper?").unwrap();
        assert_eq!(item, "tomato");
    }

    #[test]
    fn test_new_normalizes_and_validates() {
        let table = PriceTable::new([
            (" Chilli ", CropPrice::per_kg(dec!(80.50))),
            ("rice", CropPrice::new(dec!(1200), "quintal")),
        ])
        .unwrap();
        assert_eq!(table.items().collect::<Vec<_>>(), ["chilli", "rice"]);
        assert_eq!(table.get("chilli").unwrap().to_string(), "₹80.50 per kg");
        assert_eq!(table.get("rice").unwrap().to_string(), "₹1200 per quintal");

        let duplicate = PriceTable::new([
            ("onion", CropPrice::per_kg(dec!(25))),
            ("ONION", CropPrice::per_kg(dec!(30))),
        ]);
        assert!(matches!(duplicate, Err(FarmError::PriceTable(_))));

        let blank = PriceTable::new([("  ", CropPrice::per_kg(dec!(1)))]);
        assert!(matches!(blank, Err(FarmError::PriceTable(_))));

        let negative = PriceTable::new([("onion", CropPrice::per_kg(dec!(-2)))]);
        assert!(matches!(negative, Err(FarmError::PriceTable(_))));

        let no_unit = PriceTable::new([("onion", CropPrice::new(dec!(2), ""))]);
        assert!(matches!(no_unit, Err(FarmError::PriceTable(_))));
    }
}
