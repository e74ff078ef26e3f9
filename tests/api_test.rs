//! HTTP integration tests for the post endpoints.
//!
//! The router runs against a stubbed post service so no database or
//! hashing setup is required; requests go through the real extractors,
//! status mapping, and JSON shaping.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use board_api::api::{create_router, AppState};
use board_api::domain::{PostRequest, PostResponse};
use board_api::errors::{AppError, AppResult};
use board_api::infra::Database;
use board_api::services::PostService;

const KNOWN_PASSWORD: &str = "testPassword";
const MISSING_ID: i64 = 999;

/// Stub service with fixed behavior: id 999 is absent, any other id
/// exists, and only `testPassword` passes the ownership check.
struct StubPostService;

fn sample(id: i64, name: &str) -> PostResponse {
    PostResponse {
        id,
        name: name.to_string(),
        title: "test Title".to_string(),
        content: "test Content".to_string(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl PostService for StubPostService {
    async fn create_post(&self, request: PostRequest) -> AppResult<PostResponse> {
        Ok(PostResponse {
            id: 1,
            name: request.name,
            title: request.title,
            content: request.content,
            created_at: Utc::now(),
        })
    }

    async fn get_posts(&self) -> AppResult<Vec<PostResponse>> {
        // Newest first
        Ok(vec![
            sample(3, "testName3"),
            sample(2, "testName2"),
            sample(1, "testName1"),
        ])
    }

    async fn get_post(&self, id: i64) -> AppResult<PostResponse> {
        if id == MISSING_ID {
            return Err(AppError::not_found("no post found"));
        }
        Ok(sample(id, "testName"))
    }

    async fn update_post(&self, id: i64, request: PostRequest) -> AppResult<PostResponse> {
        if id == MISSING_ID {
            return Err(AppError::not_found("no post found"));
        }
        if request.password != KNOWN_PASSWORD {
            return Err(AppError::InvalidPassword);
        }
        Ok(PostResponse {
            id,
            name: request.name,
            title: request.title,
            content: request.content,
            created_at: Utc::now(),
        })
    }

    async fn delete_post(&self, id: i64, password: &str) -> AppResult<()> {
        if id == MISSING_ID {
            return Err(AppError::not_found("no post found"));
        }
        if password != KNOWN_PASSWORD {
            return Err(AppError::InvalidPassword);
        }
        Ok(())
    }
}

fn test_app() -> axum::Router {
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));
    let state = AppState::new(Arc::new(StubPostService), database);
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_body(name: &str, password: &str, title: &str, content: &str) -> Value {
    json!({
        "name": name,
        "password": password,
        "title": title,
        "content": content,
    })
}

// =============================================================================
// POST /api/posts
// =============================================================================

#[tokio::test]
async fn create_post_returns_201_with_projection() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/posts",
            post_body("testName", "testPassword", "test Title", "test Content"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], "testName");
    assert_eq!(body["title"], "test Title");
    assert_eq!(body["content"], "test Content");
    assert!(body["created_at"].is_string());
    assert!(body["id"].is_i64());
    // The password never appears in any form
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn create_post_with_blank_fields_returns_field_messages() {
    let response = test_app()
        .oneshot(json_request("POST", "/api/posts", post_body("", "", "", "")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["name"], "name must be at least 2 characters");
    assert_eq!(body["password"], "password must be at least 4 characters");
    assert_eq!(body["title"], "title is required");
}

#[tokio::test]
async fn create_post_with_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/posts")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// GET /api/posts
// =============================================================================

#[tokio::test]
async fn get_posts_returns_all_posts_newest_first() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["name"], "testName3");
    assert_eq!(posts[1]["name"], "testName2");
    assert_eq!(posts[2]["name"], "testName1");
}

// =============================================================================
// GET /api/posts/{id}
// =============================================================================

#[tokio::test]
async fn get_post_returns_projection() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/posts/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "testName");
    assert_eq!(body["title"], "test Title");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn get_missing_post_returns_404_with_msg() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/posts/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["msg"], "no post found");
}

// =============================================================================
// PUT /api/posts/{id}
// =============================================================================

#[tokio::test]
async fn update_post_returns_updated_projection() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/api/posts/1",
            post_body("updatedName", "testPassword", "updatedTitle", "updatedContent"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "updatedName");
    assert_eq!(body["title"], "updatedTitle");
    assert_eq!(body["content"], "updatedContent");
}

#[tokio::test]
async fn update_missing_post_returns_404() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/api/posts/999",
            post_body("updatedName", "testPassword", "updatedTitle", "updatedContent"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["msg"], "no post found");
}

#[tokio::test]
async fn update_with_wrong_password_returns_403() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/api/posts/1",
            post_body("updatedName", "invalidPassword", "updatedTitle", "updatedContent"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["msg"], "password does not match");
}

// =============================================================================
// DELETE /api/posts/{id}
// =============================================================================

#[tokio::test]
async fn delete_post_returns_204() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/1")
                .header("password", "testPassword")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_with_wrong_password_returns_403() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/1")
                .header("password", "invalidPassword")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["msg"], "password does not match");
}

#[tokio::test]
async fn delete_missing_post_returns_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/999")
                .header("password", "testPassword")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_without_password_header_returns_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["msg"], "password header is required");
}
