//! Shopping cart.

use serde::{Deserialize, Serialize};
use turbo_catalog::VariantId;

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub variant: VariantId,
    pub quantity: u32,
}

/// Cart the page adds variants to. The page passes it through untouched.
pub trait Cart {
    fn add_item(&mut self, variant: &VariantId, quantity: u32);

    fn items(&self) -> &[CartLine];
}

/// Cart kept in memory; adding a variant twice merges the quantities.
#[derive(Debug, Clone, Default)]
pub struct MemoryCart {
    lines: Vec<CartLine>,
}

impl MemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of units.
    pub fn quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

impl Cart for MemoryCart {
    fn add_item(&mut self, variant: &VariantId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| &line.variant == variant) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                variant: variant.clone(),
                quantity,
            }),
        }
    }

    fn items(&self) -> &[CartLine] {
        &self.lines
    }
}
