//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first), so the request ID is already set when the logging layer runs.
///
/// # Routes
/// - `/marketplace` - Marketplace transaction CRUD operations
/// - `/users` - User CRUD and password operations
/// - `/health` - Health and liveness probes
///
/// # Example
/// ```ignore
/// let state = AppState::new(Repositories::mongo(&db));
/// let router = create_router(state);
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/marketplace", handlers::transactions::transaction_routes())
        .nest("/users", handlers::users::user_routes())
        .merge(handlers::health::health_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::repositories::Repositories;

    fn app() -> Router {
        create_router(AppState::new(Repositories::in_memory()))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.clone().oneshot(request).await.unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_healthy() {
        let app = app();

        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id_header() {
        let app = app();

        let response = send(&app, Method::GET, "/health", None).await;
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_marketplace_crud_flow() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/marketplace",
            Some(json!({
                "productName": "Coca-Cola",
                "quantity": 3,
                "price": 1.5,
                "description": "cans"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["productName"], "Coca-Cola");
        assert_eq!(created["quantity"], 3);
        assert!(created["transactionDate"].is_string());
        let id = created["id"].as_str().unwrap().to_string();

        let response = send(&app, Method::GET, &format!("/marketplace/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = read_json(response).await;
        assert_eq!(fetched["productName"], "Coca-Cola");

        let response = send(
            &app,
            Method::PUT,
            &format!("/marketplace/{id}"),
            Some(json!({
                "productName": "Coca-Cola Zero",
                "quantity": 6,
                "price": 1.75
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = read_json(response).await;
        assert_eq!(updated["productName"], "Coca-Cola Zero");
        // Full replace drops the old description and keeps the date.
        assert!(updated.get("description").is_none());
        assert_eq!(updated["transactionDate"], created["transactionDate"]);

        let response = send(&app, Method::DELETE, &format!("/marketplace/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, &format!("/marketplace/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_marketplace_list_envelope_pages_through_25_records() {
        let app = app();
        for i in 0..25 {
            let response = send(
                &app,
                Method::POST,
                "/marketplace",
                Some(json!({
                    "productName": format!("item {i:02}"),
                    "quantity": 1,
                    "price": 2.0
                })),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = send(&app, Method::GET, "/marketplace?page=1&page_size=10", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page1 = read_json(response).await;
        assert_eq!(page1["page_number"], 1);
        assert_eq!(page1["page_size"], 10);
        assert_eq!(page1["count"], 10);
        assert_eq!(page1["total_pages"], 3);
        assert_eq!(page1["has_previous_page"], false);
        assert_eq!(page1["has_next_page"], true);
        assert_eq!(page1["data"].as_array().unwrap().len(), 10);

        let response = send(&app, Method::GET, "/marketplace?page=3&page_size=10", None).await;
        let page3 = read_json(response).await;
        assert_eq!(page3["count"], 5);
        assert_eq!(page3["has_previous_page"], true);
        assert_eq!(page3["has_next_page"], false);

        // One page past the end still answers 200 with an empty page.
        let response = send(&app, Method::GET, "/marketplace?page=4&page_size=10", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page4 = read_json(response).await;
        assert_eq!(page4["count"], 0);
        assert_eq!(page4["total_pages"], 3);
        assert_eq!(page4["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_marketplace_search_filters_list_and_count() {
        let app = app();
        for name in ["Coca-Cola", "Pepsi", "cola syrup"] {
            send(
                &app,
                Method::POST,
                "/marketplace",
                Some(json!({"productName": name, "quantity": 1, "price": 1.0})),
            )
            .await;
        }

        let response = send(&app, Method::GET, "/marketplace?search=cola", None).await;
        let body = read_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["total_pages"], 1);
    }

    #[tokio::test]
    async fn test_non_positive_page_is_rejected() {
        let app = app();

        let response = send(&app, Method::GET, "/marketplace?page=0", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "INVALID_PARAMETER");

        let response = send(&app, Method::GET, "/marketplace?page_size=abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "INVALID_PARAMETER");
    }

    #[tokio::test]
    async fn test_invalid_body_reports_field_details() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/marketplace",
            Some(json!({"productName": "", "quantity": -1, "price": 1.0})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|detail| detail["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"product_name"));
        assert!(fields.contains(&"quantity"));
    }

    #[tokio::test]
    async fn test_user_flow_never_exposes_password() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "hunter22"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        let keys: Vec<&str> = created.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&"password"));
        let id = created["id"].as_str().unwrap().to_string();

        let response = send(
            &app,
            Method::PATCH,
            &format!("/users/{id}/password"),
            Some(json!({"oldPassword": "wrong guess", "newPassword": "correct horse"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = read_json(response).await;
        assert_eq!(body["code"], "WRONG_PASSWORD");

        let response = send(
            &app,
            Method::PATCH,
            &format!("/users/{id}/password"),
            Some(json!({"oldPassword": "hunter22", "newPassword": "correct horse"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_duplicate_email_answers_conflict() {
        let app = app();

        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "hunter22"
        });
        let response = send(&app, Method::POST, "/users", Some(payload.clone())).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(&app, Method::POST, "/users", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = read_json(response).await;
        assert_eq!(body["code"], "DUPLICATE_ENTRY");
    }

    #[tokio::test]
    async fn test_malformed_id_answers_not_found() {
        let app = app();

        let response = send(&app, Method::GET, "/marketplace/not-a-hex-id", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
