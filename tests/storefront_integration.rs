//! Integration tests for the storefront HTTP adapter
//!
//! These tests drive the router end to end:
//! - Catalog search and categories
//! - Opening storefronts and navigating
//! - Cart operations (delayed add, quantity updates, removal, checkout)
//! - Add-to-cart under a real delay: duplicates, stock, abandoned requests
//! - Closing storefronts
//! - Mock login/logout
//! - Error bodies

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot`

use shopease_storefront::catalog::Catalog;
use shopease_storefront::config::Config;
use shopease_storefront::router::create_app_router;
use shopease_storefront::storefront::AppState;

/// Helper function to create a test app instance with no add-to-cart delay
fn create_test_app() -> axum::Router {
    create_delayed_app(Catalog::sample(), Duration::ZERO)
}

/// Helper function to create a test app with a real add-to-cart delay
fn create_delayed_app(catalog: Catalog, delay: Duration) -> axum::Router {
    let config = Config {
        add_to_cart_delay: delay,
        ..Config::default()
    };
    let state = Arc::new(AppState::new(catalog, config));
    create_app_router(state)
}

fn add_request(id: &str, product_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/storefronts/{id}/cart/items"))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "productId": product_id }).to_string()))
        .unwrap()
}

/// Helper function to send a request and get the JSON response
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Opens a storefront and returns its id
async fn open(app: &axum::Router) -> String {
    let (status, body) = send(app, "POST", "/storefronts", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["storefrontId"].as_str().unwrap().to_string()
}

fn names(products: &Value) -> Vec<String> {
    products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_catalog_search() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/catalog/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 18);
    assert_eq!(body[0]["name"], "Premium Wireless Headphones");
    assert_eq!(body[0]["price"], "299.99");

    let (_, body) = send(&app, "GET", "/catalog/products?q=watch&category=all", None).await;
    assert_eq!(names(&body), vec!["Smart Fitness Watch"]);

    let (_, body) = send(&app, "GET", "/catalog/products?category=Home", None).await;
    assert_eq!(
        names(&body),
        vec!["Coffee Maker", "Ceramic Plant Pot", "Table Lamp"]
    );

    let (_, body) = send(&app, "GET", "/catalog/categories", None).await;
    assert_eq!(
        body,
        json!(["Electronics", "Clothing", "Accessories", "Sports", "Home"])
    );
}

#[tokio::test]
async fn test_open_storefront_starts_on_home() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/storefronts",
        Some(json!({ "storefrontId": "tab-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["storefrontId"], "tab-1");

    let snapshot = &body["snapshot"];
    assert_eq!(snapshot["view"]["screen"], "home");
    assert_eq!(snapshot["view"]["category"], "all");
    assert_eq!(snapshot["products"].as_array().unwrap().len(), 3);
    assert_eq!(snapshot["cart"]["itemCount"], 0);
    assert!(snapshot["user"].is_null());
}

#[tokio::test]
async fn test_shop_now_resets_filters() {
    let app = create_test_app();
    let id = open(&app).await;

    send(&app, "POST", &format!("/storefronts/{id}/navigate"), Some(json!({ "screen": "shop" }))).await;
    let (_, body) = send(
        &app,
        "PUT",
        &format!("/storefronts/{id}/filters"),
        Some(json!({ "search": "shoe" })),
    )
    .await;
    assert_eq!(names(&body["snapshot"]["products"]), vec!["Running Shoes"]);

    let (status, body) = send(&app, "POST", &format!("/storefronts/{id}/shop-now"), None).await;
    assert_eq!(status, StatusCode::OK);
    let view = &body["snapshot"]["view"];
    assert_eq!(view["screen"], "shop");
    assert_eq!(view["search"], "");
    assert_eq!(view["category"], "all");
    assert_eq!(body["snapshot"]["products"].as_array().unwrap().len(), 18);
}

#[tokio::test]
async fn test_cart_flow() {
    let app = create_test_app();
    let id = open(&app).await;
    let items = format!("/storefronts/{id}/cart/items");

    for _ in 0..2 {
        let (status, _) = send(&app, "POST", &items, Some(json!({ "productId": "18" }))).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, body) = send(&app, "POST", &items, Some(json!({ "productId": "11" }))).await;

    let cart = &body["snapshot"]["cart"];
    assert_eq!(cart["itemCount"], 3);
    assert_eq!(cart["total"], "219.97");
    assert_eq!(cart["lines"].as_array().unwrap().len(), 2);
    assert_eq!(cart["lines"][0]["quantity"], 2);

    let (_, body) = send(
        &app,
        "PUT",
        &format!("{items}/18"),
        Some(json!({ "quantity": 5 })),
    )
    .await;
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 6);

    let (_, body) = send(&app, "PUT", &format!("{items}/11"), Some(json!({ "quantity": 0 }))).await;
    assert_eq!(body["snapshot"]["cart"]["lines"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "POST", &format!("/storefronts/{id}/cart/checkout"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["receipt"]["total"], "449.95");
    assert_eq!(body["receipt"]["summary"], "5x Jeans");
    assert_eq!(body["notice"]["title"], "Order Placed Successfully!");
    assert_eq!(body["notice"]["severity"], "success");
    // Checkout does not clear the cart.
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 5);

    let (status, body) = send(&app, "DELETE", &format!("{items}/18"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 0);
    assert_eq!(body["snapshot"]["cart"]["total"], "0");

    // Removing again is a silent no-op.
    let (status, _) = send(&app, "DELETE", &format!("{items}/18"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cart_errors() {
    let app = create_test_app();
    let id = open(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/storefronts/{id}/cart/items"),
        Some(json!({ "productId": "404" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_PRODUCT");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/storefronts/{id}/cart/items/3"),
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_SUCH_LINE");

    let (status, body) = send(&app, "GET", "/storefronts/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_STOREFRONT");
}

#[tokio::test]
async fn test_login_and_logout() {
    let app = create_test_app();
    let id = open(&app).await;
    let login = format!("/storefronts/{id}/session/login");

    let (status, body) = send(&app, "POST", &login, Some(json!({ "email": "", "password": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Please fill in all fields.");

    let (_, body) = send(&app, "GET", &format!("/storefronts/{id}"), None).await;
    assert!(body["snapshot"]["user"].is_null());

    let (status, body) = send(
        &app,
        "POST",
        &login,
        Some(json!({ "name": "", "email": "a@b.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["user"]["name"], "a");
    assert_eq!(body["notice"]["description"], "Welcome back, a!");

    let (status, _) = send(
        &app,
        "POST",
        &login,
        Some(json!({ "mode": "register", "email": "c@d.com", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&app, "POST", &format!("/storefronts/{id}/session/logout"), None).await;
    assert!(body["snapshot"]["user"].is_null());
}

#[tokio::test]
async fn test_duplicate_add_during_delay_is_refused() {
    let app = create_delayed_app(Catalog::sample(), Duration::from_millis(150));
    let id = open(&app).await;
    let items = format!("/storefronts/{id}/cart/items");

    let (first, second) = tokio::join!(
        send(&app, "POST", &items, Some(json!({ "productId": "2" }))),
        send(&app, "POST", &items, Some(json!({ "productId": "2" }))),
    );
    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);

    let refused = if first.0 == StatusCode::CONFLICT { &first.1 } else { &second.1 };
    assert_eq!(refused["code"], "ADD_IN_PROGRESS");

    let (_, body) = send(&app, "GET", &format!("/storefronts/{id}"), None).await;
    let cart = &body["snapshot"]["cart"];
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
    assert_eq!(cart["lines"][0]["quantity"], 1);
    assert_eq!(body["snapshot"]["adding"], json!([]));
}

#[tokio::test]
async fn test_out_of_stock_add_is_refused() {
    let catalog = Catalog::from_json(
        r#"[
            {"id": "k", "name": "Kite", "price": "19.99", "category": "Sports",
             "image": "kite.png", "description": "A kite", "stock": 0,
             "rating": 4.0, "reviews": 3},
            {"id": "b", "name": "Ball", "price": "5", "category": "Sports",
             "image": "ball.png", "description": "A ball", "stock": 4,
             "rating": 3.5, "reviews": 1}
        ]"#,
    )
    .unwrap();
    let app = create_delayed_app(catalog, Duration::from_millis(50));
    let id = open(&app).await;
    let items = format!("/storefronts/{id}/cart/items");

    let (status, body) = send(&app, "POST", &items, Some(json!({ "productId": "k" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "OUT_OF_STOCK");

    let (_, body) = send(&app, "GET", &format!("/storefronts/{id}"), None).await;
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 0);
    assert_eq!(body["snapshot"]["adding"], json!([]));

    let (status, body) = send(&app, "POST", &items, Some(json!({ "productId": "b" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["cart"]["total"], "5");
}

#[tokio::test]
async fn test_abandoned_add_can_be_retried() {
    let delay = Duration::from_millis(200);
    let app = create_delayed_app(Catalog::sample(), delay);
    let id = open(&app).await;

    // The client gives up while the add is still waiting out its delay.
    let abandoned =
        tokio::time::timeout(Duration::from_millis(20), app.clone().oneshot(add_request(&id, "5")))
            .await;
    assert!(abandoned.is_err());

    let (_, body) = send(&app, "GET", &format!("/storefronts/{id}"), None).await;
    assert_eq!(body["snapshot"]["adding"], json!([]));
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 0);

    // Nothing lands once the original delay would have elapsed.
    tokio::time::sleep(delay).await;
    let (_, body) = send(&app, "GET", &format!("/storefronts/{id}"), None).await;
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 0);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/storefronts/{id}/cart/items"),
        Some(json!({ "productId": "5" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["cart"]["lines"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_quantity_above_line_limit_is_refused() {
    let app = create_test_app();
    let id = open(&app).await;
    let items = format!("/storefronts/{id}/cart/items");
    send(&app, "POST", &items, Some(json!({ "productId": "3" }))).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("{items}/3"),
        Some(json!({ "quantity": 10_000_000_000_i64 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "QUANTITY_TOO_LARGE");

    let (status, body) = send(&app, "PUT", &format!("{items}/3"), Some(json!({ "quantity": 999 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["cart"]["itemCount"], 999);

    let (status, body) = send(&app, "POST", &items, Some(json!({ "productId": "3" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "QUANTITY_TOO_LARGE");
}

#[tokio::test]
async fn test_close_storefront() {
    let app = create_test_app();
    let id = open(&app).await;
    let uri = format!("/storefronts/{id}");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_STOREFRONT");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
