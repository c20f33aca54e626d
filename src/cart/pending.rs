//! In-flight add-to-cart requests
//!
//! Adding to the cart waits out a simulated network delay first. While that
//! delay runs the product's add control is disabled, so a second add for the
//! same product is refused rather than queued.

use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct PendingAdds {
    in_flight: HashSet<String>,
}

impl PendingAdds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `product_id` as pending. Returns `false` if it already was.
    pub fn begin(&mut self, product_id: &str) -> bool {
        self.in_flight.insert(product_id.to_string())
    }

    /// Clears the pending mark. Returns `false` if there was none.
    pub fn finish(&mut self, product_id: &str) -> bool {
        self.in_flight.remove(product_id)
    }

    pub fn is_pending(&self, product_id: &str) -> bool {
        self.in_flight.contains(product_id)
    }

    /// Pending product ids, sorted for stable output.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.in_flight.iter().cloned().collect();
        ids.sort();
        ids
    }
}
