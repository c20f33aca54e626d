//! Catalog Domain Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock level under which a product is flagged as running out
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A purchasable product. Never mutated once the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Category label (e.g. "Electronics")
    pub category: String,

    /// Image URL
    pub image: String,

    pub description: String,

    /// Units available
    pub stock: u32,

    /// Average rating between 0 and 5
    pub rating: f32,

    /// Number of reviews
    pub reviews: u32,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// True when the product should carry an "Only N left!" badge.
    /// Sold-out products carry it too, next to their out-of-stock state.
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

/// Category selector used when filtering the catalog.
///
/// Serialized as the label itself, or `"all"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        // An empty selection behaves like "all".
        if value.is_empty() || value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from(value.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(label) => label,
        }
    }
}
