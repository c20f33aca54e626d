//! ShopEase Storefront Library
//!
//! This library provides the state logic of a demo storefront: a read-only
//! product catalog, a shopping cart, mock sign-in and the view controller
//! that routes user intents to them, plus a thin JSON adapter over HTTP.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod session;
pub mod storefront;

// Infrastructure
pub mod config;
pub mod error;
pub mod notify;
pub mod router;
