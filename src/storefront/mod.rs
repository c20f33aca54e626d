//! Storefront Module
//!
//! This module ties the stores together for one UI instance, including:
//! - View state and adapter payloads
//! - The storefront controller
//! - Application state holding every open storefront
//! - REST API handlers

pub mod controller;
pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use controller::Storefront;
pub use handlers::routes;
pub use models::{Screen, StorefrontSnapshot, ViewState};
pub use state::{AppState, SharedState};
