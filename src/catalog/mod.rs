//! Product Catalog Module
//!
//! This module contains the read-only product data and the derived views the
//! storefront renders:
//! - Domain models (Product, CategoryFilter)
//! - The embedded sample dataset
//! - Search and category filtering

pub mod data;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CategoryFilter, Product};
pub use store::{filter_products, Catalog, FEATURED_COUNT};
