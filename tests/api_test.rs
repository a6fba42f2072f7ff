//! HTTP-level tests for both applications, run in-process with
//! `actix_web::test` (no sockets).

use actix_web::http::{header, StatusCode};
use actix_web::web::Bytes;
use actix_web::{test, web};
use order_lookup::{api_app, web_app, Store};
use serde_json::{json, Value};

async fn call_api(req: test::TestRequest) -> (StatusCode, Option<String>, Bytes) {
    let app = test::init_service(api_app(web::Data::new(Store::seeded()))).await;
    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (status, content_type, test::read_body(resp).await)
}

async fn get_api(path: &str) -> (StatusCode, Bytes) {
    let (status, _, body) = call_api(test::TestRequest::get().uri(path)).await;
    (status, body)
}

async fn get_json(path: &str) -> Value {
    let (status, body) = get_api(path).await;
    assert_eq!(status, StatusCode::OK, "GET {path}");
    serde_json::from_slice(&body).expect("response body should be JSON")
}

// ── Products ─────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn every_seeded_product_is_found() {
    for id in [1000, 1001, 1002] {
        let product = get_json(&format!("/api/product/{id}")).await;
        assert_eq!(product["id"], id);
    }
}

#[actix_web::test]
async fn product_body_has_integer_price() {
    let product = get_json("/api/product/1001").await;
    assert_eq!(product, json!({ "id": 1001, "name": "Pear", "price": 325 }));
}

#[actix_web::test]
async fn success_is_served_as_json() {
    let (status, content_type, _) =
        call_api(test::TestRequest::get().uri("/api/product/1000")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
}

// ── Customers ────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn customer_body_is_exact() {
    let (status, body) = get_api("/api/customer/111").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Bytes::from_static(br#"{"id":111,"name":"Fred","email":"fred@example.com"}"#)
    );
}

// ── Orders ───────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn order_one_has_two_line_items() {
    let order = get_json("/api/order/1").await;
    assert_eq!(order["id"], 1);
    assert_eq!(order["customer"]["id"], 112);
    assert_eq!(order["customer"]["name"], "Barny");
    assert_eq!(order["total"], 675);
    assert_eq!(order["created_at"], "2010-05-03T10:30:00Z");

    let subtotals: Vec<i64> = order["lineitems"]
        .as_array()
        .expect("lineitems should be an array")
        .iter()
        .map(|l| l["subtotal"].as_i64().unwrap())
        .collect();
    assert_eq!(subtotals, [500, 175]);
}

#[actix_web::test]
async fn order_two_has_one_line_item() {
    let order = get_json("/api/order/2").await;
    assert_eq!(order["customer"]["email"], "fred@example.com");
    assert_eq!(order["total"], 975);
    assert_eq!(order["created_at"], "2010-06-01T14:05:00Z");
    let items = order["lineitems"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["product"]["name"], "Pear");
    assert_eq!(items[0]["subtotal"], 975);
}

#[actix_web::test]
async fn line_item_by_id() {
    let item = get_json("/api/order/1/lineitem/0").await;
    assert_eq!(
        item,
        json!({
            "id": 0,
            "quantity": 2,
            "product": { "id": 1000, "name": "Apple", "price": 250 },
            "subtotal": 500
        })
    );

    let banana = get_json("/api/order/1/lineitem/1").await;
    assert_eq!(banana["product"]["name"], "Banana");
}

// ── Not found ────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn unknown_or_malformed_ids_are_empty_404s() {
    for path in [
        "/api/product/9999",
        "/api/customer/0",
        "/api/order/3",
        "/api/order/-1",
        "/api/order/abc",
        "/api/order/99999999999999999999",
        "/api/order/1/lineitem/5",
        "/api/order/2/lineitem/1",
        "/api/order/9/lineitem/0",
        "/api/order/1/lineitem/x",
    ] {
        let (status, body) = get_api(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {path}");
        assert!(body.is_empty(), "GET {path} should have an empty body");
    }
}

#[actix_web::test]
async fn unregistered_paths_fall_through() {
    for path in ["/", "/api", "/api/orders/1", "/api/order", "/api/order/1/lineitem"] {
        let (status, _) = get_api(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {path}");
    }
}

// ── Routing behaviour ────────────────────────────────────────────────────────

#[actix_web::test]
async fn trailing_slash_is_ignored() {
    let (status, with_slash) = get_api("/api/customer/112/").await;
    assert_eq!(status, StatusCode::OK);
    let (_, without) = get_api("/api/customer/112").await;
    assert_eq!(with_slash, without);

    let item = get_json("/api/order/2/lineitem/0/").await;
    assert_eq!(item["subtotal"], 975);
}

#[actix_web::test]
async fn method_is_not_checked() {
    let (status, _, body) =
        call_api(test::TestRequest::post().uri("/api/product/1002")).await;
    assert_eq!(status, StatusCode::OK);
    let product: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(product["name"], "Banana");
}

#[actix_web::test]
async fn repeated_requests_are_byte_identical() {
    let app = test::init_service(api_app(web::Data::new(Store::seeded()))).await;
    let mut bodies = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::get().uri("/api/order/1").to_request();
        bodies.push(test::call_and_read_body(&app, req).await);
    }
    assert!(!bodies[0].is_empty());
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

// ── Web listener ─────────────────────────────────────────────────────────────

#[actix_web::test]
async fn web_app_answers_every_path() {
    let app = test::init_service(web_app()).await;
    for path in ["/", "/anything", "/api/order/1", "/api/product/1000/"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
        assert_eq!(test::read_body(resp).await, Bytes::from_static(b"yay!"));
    }

    let req = test::TestRequest::delete().uri("/whatever").to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, Bytes::from_static(b"yay!"));
}
