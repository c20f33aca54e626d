//! REST API handlers for storefront operations
//!
//! Each endpoint maps onto one controller operation and answers with the
//! storefront's derived state.

use super::{controller::Storefront, models::*, state::SharedState};
use crate::catalog::CategoryFilter;
use crate::error::StoreResult;
use crate::notify::Notice;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{debug, info};

/// Creates routes for catalog and storefront operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/catalog/products", get(list_products))
        .route("/catalog/categories", get(list_categories))
        .route("/storefronts", post(open_storefront))
        .route(
            "/storefronts/:id",
            get(get_storefront).delete(close_storefront),
        )
        .route("/storefronts/:id/navigate", post(navigate))
        .route("/storefronts/:id/shop-now", post(shop_now))
        .route("/storefronts/:id/view-all", post(view_all_products))
        .route("/storefronts/:id/continue-shopping", post(continue_shopping))
        .route("/storefronts/:id/filters", put(set_filters))
        .route("/storefronts/:id/cart/items", post(add_to_cart))
        .route(
            "/storefronts/:id/cart/items/:product_id",
            put(set_quantity).delete(remove_from_cart),
        )
        .route("/storefronts/:id/cart/checkout", post(checkout))
        .route("/storefronts/:id/session/login", post(login))
        .route("/storefronts/:id/session/logout", post(logout))
}

fn respond(id: String, storefront: &Storefront, notice: Option<Notice>) -> ActionResponse {
    ActionResponse {
        storefront_id: id,
        snapshot: storefront.snapshot(),
        notice,
        receipt: None,
    }
}

/// Applies `f` to storefront `id` and answers with its new state.
fn act(
    state: &SharedState,
    id: String,
    f: impl FnOnce(&mut Storefront),
) -> StoreResult<Json<ActionResponse>> {
    let response = state.with_storefront(&id, |sf| {
        f(sf);
        respond(id.clone(), sf, None)
    })?;
    Ok(Json(response))
}

// =============================================================================
// Catalog
// =============================================================================

/// Endpoint: GET /catalog/products?q=&category=
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let category = CategoryFilter::from(query.category);
    Json(state.catalog.filter(&query.q, &category))
}

/// Endpoint: GET /catalog/categories
async fn list_categories(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.catalog.categories())
}

// =============================================================================
// Storefront / Navigation
// =============================================================================

/// Endpoint: POST /storefronts
/// The body is optional; without one a new id is generated.
async fn open_storefront(
    State(state): State<SharedState>,
    payload: Option<Json<OpenStorefrontInput>>,
) -> StoreResult<impl IntoResponse> {
    let input = payload.map(|Json(p)| p).unwrap_or_default();
    let id = state.open_storefront(input.storefront_id);
    let response = state.with_storefront(&id, |sf| respond(id.clone(), sf, None))?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Endpoint: GET /storefronts/:id
async fn get_storefront(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, |_| {})
}

/// Endpoint: DELETE /storefronts/:id
/// Discards the storefront with its cart and session.
async fn close_storefront(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<StatusCode> {
    state.close_storefront(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Endpoint: POST /storefronts/:id/navigate
async fn navigate(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<NavigateInput>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, |sf| sf.navigate(payload.screen))
}

/// Endpoint: POST /storefronts/:id/shop-now
async fn shop_now(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, Storefront::shop_now)
}

/// Endpoint: POST /storefronts/:id/view-all
async fn view_all_products(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, Storefront::view_all_products)
}

/// Endpoint: POST /storefronts/:id/continue-shopping
async fn continue_shopping(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, Storefront::continue_shopping)
}

/// Endpoint: PUT /storefronts/:id/filters
async fn set_filters(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<FiltersInput>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, |sf| {
        if let Some(search) = payload.search {
            sf.set_search(search);
        }
        if let Some(category) = payload.category {
            sf.set_category(category);
        }
    })
}

// =============================================================================
// Cart
// =============================================================================

/// Endpoint: POST /storefronts/:id/cart/items
/// Waits out the simulated network delay before the item lands in the cart.
/// The storefront is not locked during the wait.
async fn add_to_cart(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<AddToCartInput>,
) -> StoreResult<Json<ActionResponse>> {
    let product_id = payload.product_id;
    state.with_storefront(&id, |sf| sf.begin_add(&product_id))??;

    let mut release = ReleaseOnDrop {
        state: &state,
        id: &id,
        product_id: &product_id,
        armed: true,
    };
    tokio::time::sleep(state.config.add_to_cart_delay).await;
    release.armed = false;

    let response = state.with_storefront(&id, |sf| {
        sf.complete_add(&product_id)
            .map(|()| respond(id.clone(), sf, None))
    })??;
    Ok(Json(response))
}

/// Re-enables a product's add control when an add request is dropped
/// (client gone, timeout) before its delay has elapsed.
struct ReleaseOnDrop<'a> {
    state: &'a SharedState,
    id: &'a str,
    product_id: &'a str,
    armed: bool,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let product_id = self.product_id;
        if let Err(err) = self
            .state
            .with_storefront(self.id, |sf| sf.cancel_add(product_id))
        {
            debug!(%err, product_id, "Dropped add for a closed storefront");
        }
    }
}

/// Endpoint: PUT /storefronts/:id/cart/items/:product_id
async fn set_quantity(
    State(state): State<SharedState>,
    Path((id, product_id)): Path<(String, String)>,
    Json(payload): Json<QuantityInput>,
) -> StoreResult<Json<ActionResponse>> {
    let response = state.with_storefront(&id, |sf| {
        sf.set_quantity(&product_id, payload.quantity)
            .map(|()| respond(id.clone(), sf, None))
    })??;
    Ok(Json(response))
}

/// Endpoint: DELETE /storefronts/:id/cart/items/:product_id
async fn remove_from_cart(
    State(state): State<SharedState>,
    Path((id, product_id)): Path<(String, String)>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, |sf| sf.remove_from_cart(&product_id))
}

/// Endpoint: POST /storefronts/:id/cart/checkout
/// Returns a receipt; the cart is left as it was.
async fn checkout(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<Json<ActionResponse>> {
    let response = state.with_storefront(&id, |sf| {
        let (receipt, notice) = sf.checkout();
        info!(storefront_id = %id, summary = %receipt.summary, "REST API CHECKOUT");
        ActionResponse {
            receipt: Some(receipt),
            ..respond(id.clone(), sf, Some(notice))
        }
    })?;
    Ok(Json(response))
}

// =============================================================================
// Session
// =============================================================================

/// Endpoint: POST /storefronts/:id/session/login
async fn login(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<LoginInput>,
) -> StoreResult<Json<ActionResponse>> {
    let response = state.with_storefront(&id, |sf| {
        sf.login(payload.mode, payload.credentials)
            .map(|notice| respond(id.clone(), sf, Some(notice)))
    })??;
    Ok(Json(response))
}

/// Endpoint: POST /storefronts/:id/session/logout
async fn logout(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StoreResult<Json<ActionResponse>> {
    act(&state, id, Storefront::logout)
}
