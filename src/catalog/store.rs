//! Read-only product catalog and its derived views

use super::{
    data::sample_products,
    models::{CategoryFilter, Product},
};
use crate::error::CatalogError;
use rust_decimal::Decimal;
use std::{collections::HashSet, path::Path, sync::Arc};
use tracing::info;

/// Number of products shown on the home screen
pub const FEATURED_COUNT: usize = 3;

/// The immutable product list, in dataset order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, negative prices and
    /// out-of-range ratings.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::InvalidRating {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The embedded demo dataset.
    pub fn sample() -> Self {
        Self {
            products: sample_products().into_iter().map(Arc::new).collect(),
        }
    }

    /// Parses a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Reads a JSON array of products from `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn list_all(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Products matching `query` within `category`, in catalog order.
    pub fn filter(&self, query: &str, category: &CategoryFilter) -> Vec<Arc<Product>> {
        filter_products(&self.products, query, category)
    }

    /// The first `count` products.
    pub fn featured(&self, count: usize) -> Vec<Arc<Product>> {
        self.products.iter().take(count).cloned().collect()
    }
}

/// Returns the products whose category matches `category` and whose name,
/// description or category contains `query`, ignoring case.
pub fn filter_products(
    products: &[Arc<Product>],
    query: &str,
    category: &CategoryFilter,
) -> Vec<Arc<Product>> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(&p.category) && matches_query(p, &needle))
        .cloned()
        .collect()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}
