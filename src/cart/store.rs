//! Shopping Cart Store
//!
//! Holds the cart lines of one storefront. Lines keep the order in which
//! their products were first added.

use super::{
    helpers::format_item_summary,
    models::{CartLine, CartSummary, Receipt},
};
use crate::catalog::Product;
use crate::error::{StoreError, StoreResult};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Largest quantity a single cart line may hold
pub const MAX_LINE_QUANTITY: u32 = 999;

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Adds one unit of `product`, appending a new line if needed.
    ///
    /// Fails with [`StoreError::QuantityTooLarge`] once the line already
    /// holds [`MAX_LINE_QUANTITY`] units.
    pub fn add(&mut self, product: Arc<Product>) -> StoreResult<()> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = bump(&product.id, existing.quantity)?;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line, and is a no-op when the
    /// line is absent. A positive quantity for a product that is not in the
    /// cart is rejected with [`StoreError::NoSuchLine`], and one above
    /// [`MAX_LINE_QUANTITY`] with [`StoreError::QuantityTooLarge`].
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        if quantity <= 0 {
            self.remove(product_id);
            return Ok(());
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q <= MAX_LINE_QUANTITY)
            .ok_or_else(|| too_large(product_id))?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id)
            .ok_or_else(|| StoreError::NoSuchLine(product_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Adds one to an existing line. No-op when absent.
    pub fn increment(&mut self, product_id: &str) -> StoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = bump(product_id, line.quantity)?;
        }
        Ok(())
    }

    /// Takes one off an existing line, removing it at zero. No-op when absent.
    pub fn decrement(&mut self, product_id: &str) {
        let Some(index) = self.lines.iter().position(|l| l.product.id == product_id) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }

    /// Deletes the line for `product_id` if present.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Computes a confirmation for the current contents. The cart itself is
    /// left untouched and nothing is placed anywhere.
    pub fn checkout(&self) -> Receipt {
        Receipt {
            total: self.total(),
            item_count: self.item_count(),
            line_count: self.line_count(),
            summary: format_item_summary(&self.lines),
        }
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

/// One more than `quantity`, within [`MAX_LINE_QUANTITY`].
fn bump(product_id: &str, quantity: u32) -> StoreResult<u32> {
    quantity
        .checked_add(1)
        .filter(|q| *q <= MAX_LINE_QUANTITY)
        .ok_or_else(|| too_large(product_id))
}

fn too_large(product_id: &str) -> StoreError {
    StoreError::QuantityTooLarge {
        product_id: product_id.to_string(),
        max: MAX_LINE_QUANTITY,
    }
}
