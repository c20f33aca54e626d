//! Routing module for the storefront application

use crate::storefront::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        info!(%method, %uri, "REQ");
        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!(%method, %uri, status = %res.status(), "RES (Error)");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::storefront::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
