//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::Product;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product in the cart together with how many of it were added
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// The product, shared with the catalog
    pub product: Arc<Product>,

    /// Always at least 1; a line that would drop to 0 is removed instead
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (`price × quantity`)
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Confirmation returned by checkout
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Sum of all line subtotals
    pub total: Decimal,

    /// Sum of all quantities
    pub item_count: u64,

    /// Number of distinct products
    pub line_count: usize,

    /// One-line description, e.g. `"2x Jeans, 1x Yoga Mat"`
    pub summary: String,
}

/// Derived cart state sent to the front-end
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub total: Decimal,
}
