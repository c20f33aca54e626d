//! Storefront view state and adapter payloads

use crate::cart::{CartSummary, Receipt};
use crate::catalog::{CategoryFilter, Product};
use crate::notify::Notice;
use crate::session::{AuthMode, Credentials, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// View State
// =============================================================================

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Shop,
    Cart,
}

/// Active screen plus the shop filters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub screen: Screen,
    pub search: String,
    pub category: CategoryFilter,
}

impl ViewState {
    /// Clears the search text and selects every category.
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
    }
}

/// Everything a front-end needs to render one storefront
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSnapshot {
    pub view: ViewState,

    /// Category labels for the filter control
    pub categories: Vec<String>,

    /// Products for the current screen: featured on home, filtered on shop,
    /// empty on cart
    pub products: Vec<Arc<Product>>,

    pub cart: CartSummary,

    pub user: Option<User>,

    /// Products whose add-to-cart is still in flight
    pub adding: Vec<String>,
}

// =============================================================================
// Adapter Requests / Responses
// =============================================================================

/// Body for POST /storefronts
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStorefrontInput {
    /// Reuse this id instead of generating one
    pub storefront_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NavigateInput {
    pub screen: Screen,
}

/// Body for PUT /storefronts/:id/filters; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct FiltersInput {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct QuantityInput {
    pub quantity: i64,
}

/// Body for POST /storefronts/:id/session/login
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub mode: AuthMode,
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// Query string for GET /catalog/products
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

/// Response for every storefront action
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub storefront_id: String,
    pub snapshot: StorefrontSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}
