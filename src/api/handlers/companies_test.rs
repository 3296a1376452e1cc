//! Integration tests for company endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

/// Create a test app with an in-memory database.
async fn test_app() -> Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    routes::create_router(AppState::new(db))
}

/// Helper to parse JSON response body.
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn create_apple(app: &Router) {
    let response = app
        .clone()
        .oneshot(request_json(
            "POST",
            "/companies",
            json!({"code": "apple", "name": "Apple Computer", "description": "Maker of OSX."}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_companies_initially_empty() {
    let app = test_app().await;

    let response = app.oneshot(get("/companies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body, json!({"companies": []}));
}

#[tokio::test(flavor = "multi_thread")]
async fn created_company_appears_in_list_exactly_once() {
    let app = test_app().await;
    create_apple(&app).await;

    let response = app.oneshot(get("/companies")).await.unwrap();
    let body = json_body(response).await;

    let companies = body["companies"].as_array().unwrap();
    let matches: Vec<_> = companies
        .iter()
        .filter(|c| c["code"] == "apple")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Apple Computer");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_company_envelope() {
    let app = test_app().await;

    let response = app
        .oneshot(request_json(
            "POST",
            "/companies",
            json!({"code": "apple", "name": "Apple Computer", "description": "Maker of OSX."}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"company": {
            "code": "apple",
            "name": "Apple Computer",
            "description": "Maker of OSX."
        }})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_duplicate_code_returns_conflict() {
    let app = test_app().await;
    create_apple(&app).await;

    let response = app
        .oneshot(request_json(
            "POST",
            "/companies",
            json!({"code": "apple", "name": "Apple again", "description": null}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["error"]["status"], 409);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_company_without_invoices_has_empty_invoice_list() {
    let app = test_app().await;
    create_apple(&app).await;

    let response = app.oneshot(get("/companies/apple")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"company": {
            "code": "apple",
            "name": "Apple Computer",
            "description": "Maker of OSX.",
            "invoices": []
        }})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn get_company_lists_its_invoice_ids() {
    let app = test_app().await;
    create_apple(&app).await;

    let response = app
        .clone()
        .oneshot(request_json(
            "POST",
            "/invoices",
            json!({"comp_code": "apple", "amt": 100.0}),
        ))
        .await
        .unwrap();
    let invoice_id = json_body(response).await["invoice"]["id"].as_i64().unwrap();

    let response = app.oneshot(get("/companies/apple")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["company"]["invoices"], json!([invoice_id]));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_company_returns_404() {
    let app = test_app().await;

    let response = app.oneshot(get("/companies/xyz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"error": {"message": "Company not found", "status": 404}})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_missing_company_returns_404() {
    let app = test_app().await;

    let response = app
        .oneshot(request_json(
            "PATCH",
            "/companies/xyz",
            json!({"name": "Nobody", "description": null}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "Company not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_updates_name_and_description() {
    let app = test_app().await;
    create_apple(&app).await;

    let response = app
        .clone()
        .oneshot(request_json(
            "PATCH",
            "/companies/apple",
            json!({"name": "Apple Inc", "description": "Fruit stand."}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"company": {
            "code": "apple",
            "name": "Apple Inc",
            "description": "Fruit stand."
        }})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_company_returns_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/companies/xyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn second_delete_returns_404() {
    let app = test_app().await;
    create_apple(&app).await;

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/companies/apple")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, json!({"status": "deleted"}));

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn unmatched_route_returns_404_envelope() {
    let app = test_app().await;

    let response = app.oneshot(get("/no/such/route")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"error": {"message": "Not Found", "status": 404}})
    );
}
