//! Handler tests: route wiring, status codes, and the shared-reference
//! semantics observable through the API.

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use crate::routes;
use crate::state::AppState;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(routes::configure),
        )
        .await
    };
}

macro_rules! create_product {
    ($app:expr, $name:expr, $price_cents:expr, $quantity:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({ "name": $name, "priceCents": $price_cents, "quantity": $quantity }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

macro_rules! create_user {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": $name }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

#[actix_web::test]
async fn create_product_returns_201_with_snapshot() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({ "name": "Mouse", "priceCents": 150, "quantity": 10 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Mouse");
    assert_eq!(body["priceCents"], 150);
    assert_eq!(body["quantity"], 10);
    assert!(body["id"].is_string());
}

#[actix_web::test]
async fn search_filters_case_and_accent_insensitively() {
    let app = test_app!();
    create_product!(app, "Mouse", 100, 10);
    create_product!(app, "Teclado", 200, 5);

    let req = test::TestRequest::get()
        .uri("/api/products?name=teC")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Teclado");

    // Empty filter returns everything.
    let req = test::TestRequest::get().uri("/api/products").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 2);
}

#[actix_web::test]
async fn unknown_product_maps_to_404() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/products/non-existent-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn non_positive_add_amount_maps_to_400() {
    let app = test_app!();
    let product = create_product!(app, "Mouse", 100, 10);
    let id = product["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/products/{id}/add"))
        .set_json(json!({ "amount": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_QUANTITY");
}

#[actix_web::test]
async fn insufficient_stock_maps_to_400_and_leaves_state() {
    let app = test_app!();
    let product = create_product!(app, "Mouse", 100, 10);
    let id = product["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/products/{id}/remove"))
        .set_json(json!({ "amount": 20 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INSUFFICIENT_STOCK");

    // No partial mutation.
    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let current: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(current["quantity"], 10);
}

#[actix_web::test]
async fn delete_product_is_idempotent() {
    let app = test_app!();
    let product = create_product!(app, "Mouse", 100, 10);
    let id = product["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/products/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

#[actix_web::test]
async fn delete_user_distinguishes_known_and_unknown() {
    let app = test_app!();
    let user = create_user!(app, "Alice");
    let id = user["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Second delete: the manager reports false, the route maps to 404.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_users_filters_by_name() {
    let app = test_app!();
    create_user!(app, "Renan Eduardo");
    create_user!(app, "Felipe Alves");

    let req = test::TestRequest::get()
        .uri("/api/users?name=Renan")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Renan Eduardo");
}

#[actix_web::test]
async fn set_user_products_assigns_shared_references() {
    let app = test_app!();
    let alice = create_user!(app, "Alice");
    let mouse = create_product!(app, "Mouse", 150, 10);
    let user_id = alice["id"].as_str().unwrap();
    let product_id = mouse["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}/products"))
        .set_json(json!({ "productIds": [product_id] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Mutate through the inventory...
    let req = test::TestRequest::patch()
        .uri(&format!("/api/products/{product_id}/remove"))
        .set_json(json!({ "amount": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // ...and observe it through the user's list: same entity.
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{user_id}/products"))
        .to_request();
    let products: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["quantity"], 7);
}

#[actix_web::test]
async fn set_user_products_rejects_unknown_ids() {
    let app = test_app!();
    let alice = create_user!(app, "Alice");
    let user_id = alice["id"].as_str().unwrap();

    // Unknown product id.
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}/products"))
        .set_json(json!({ "productIds": ["non-existent-id"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Unknown user id.
    let mouse = create_product!(app, "Mouse", 150, 10);
    let req = test::TestRequest::put()
        .uri("/api/users/non-existent-id/products")
        .set_json(json!({ "productIds": [mouse["id"].as_str().unwrap()] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
