//! Product-level pricing.

use crate::money::{Money, TaxedMoney};
use serde::{Deserialize, Serialize};

/// Lowest and highest variant prices of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub start: Option<TaxedMoney>,
    #[serde(default)]
    pub stop: Option<TaxedMoney>,
}

impl PriceRange {
    /// A range where every variant costs the same.
    pub fn single(price: TaxedMoney) -> Self {
        Self {
            start: Some(price.clone()),
            stop: Some(price),
        }
    }
}

/// Pricing block of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub price_range_undiscounted: Option<PriceRange>,
}

impl ProductPricing {
    /// Pricing with a single price for all variants.
    pub fn fixed(price: Money) -> Self {
        let range = PriceRange::single(TaxedMoney::untaxed(price));
        Self {
            on_sale: false,
            price_range: Some(range.clone()),
            price_range_undiscounted: Some(range),
        }
    }

    /// Gross price at the start of the range, the "from" price.
    pub fn start_gross(&self) -> Option<&Money> {
        self.price_range
            .as_ref()
            .and_then(|range| range.start.as_ref())
            .map(|start| &start.gross)
    }
}
