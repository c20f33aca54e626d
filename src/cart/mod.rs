//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, Receipt, CartSummary)
//! - Formatting helpers
//! - The cart store itself
//! - Tracking of delayed add-to-cart requests

pub mod helpers;
pub mod models;
pub mod pending;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CartLine, CartSummary, Receipt};
pub use pending::PendingAdds;
pub use store::{Cart, MAX_LINE_QUANTITY};
