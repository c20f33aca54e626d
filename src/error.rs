//! Error types for the storefront
//!
//! Store operations never crash the process: every failure here ends up as a
//! user-visible notice or a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rejection raised by the login/registration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were left empty.
    #[error("Please fill in all fields.")]
    MissingFields(Vec<&'static str>),
}

/// Errors produced by storefront operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Product not found: {0}")]
    UnknownProduct(String),

    /// `set_quantity` with a positive quantity for a product not in the cart.
    #[error("Product {0} is not in the cart")]
    NoSuchLine(String),

    /// A cart line would hold more than the per-line limit.
    #[error("Product {product_id} cannot exceed a quantity of {max}")]
    QuantityTooLarge { product_id: String, max: u32 },

    #[error("Product {0} is out of stock")]
    OutOfStock(String),

    /// A delayed add for this product has not finished yet.
    #[error("Product {0} is already being added to the cart")]
    AddInProgress(String),

    #[error("No pending add for product {0}")]
    AddNotPending(String),

    #[error("Storefront not found: {0}")]
    UnknownStorefront(String),
}

/// Errors raised while loading a product dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Product {0} has a negative price")]
    NegativePrice(String),

    #[error("Product {id} has rating {rating}, expected 0 to 5")]
    InvalidRating { id: String, rating: f32 },
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl StoreError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "VALIDATION_FAILED",
            StoreError::UnknownProduct(_) => "UNKNOWN_PRODUCT",
            StoreError::NoSuchLine(_) => "NO_SUCH_LINE",
            StoreError::QuantityTooLarge { .. } => "QUANTITY_TOO_LARGE",
            StoreError::OutOfStock(_) => "OUT_OF_STOCK",
            StoreError::AddInProgress(_) => "ADD_IN_PROGRESS",
            StoreError::AddNotPending(_) => "ADD_NOT_PENDING",
            StoreError::UnknownStorefront(_) => "UNKNOWN_STOREFRONT",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) | StoreError::QuantityTooLarge { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            StoreError::UnknownProduct(_)
            | StoreError::NoSuchLine(_)
            | StoreError::UnknownStorefront(_) => StatusCode::NOT_FOUND,
            StoreError::OutOfStock(_)
            | StoreError::AddInProgress(_)
            | StoreError::AddNotPending(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };

        tracing::warn!(code = body.code, message = %body.message, "Request rejected");

        (status, Json(body)).into_response()
    }
}

/// Result alias for storefront operations.
pub type StoreResult<T> = Result<T, StoreError>;
