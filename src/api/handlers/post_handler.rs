//! Post handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{PostRequest, PostResponse};
use crate::errors::{AppError, AppResult};

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation error (field -> message map)")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostRequest>,
) -> AppResult<(StatusCode, Json<PostResponse>)> {
    let post = state.post_service.create_post(payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts, newest first", body = [PostResponse])
    )
)]
pub async fn get_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.post_service.get_posts().await?;
    Ok(Json(posts))
}

/// Get a single post
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The requested post", body = PostResponse),
        (status = 404, description = "No post with that id")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PostResponse>> {
    let post = state.post_service.get_post(id).await?;
    Ok(Json(post))
}

/// Update a post after password verification
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 403, description = "Password does not match"),
        (status = 404, description = "No post with that id")
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PostRequest>,
) -> AppResult<Json<PostResponse>> {
    let post = state.post_service.update_post(id, payload).await?;
    Ok(Json(post))
}

/// Delete a post after password verification
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post id"),
        ("password" = String, Header, description = "Ownership password")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Missing password header"),
        (status = 403, description = "Password does not match"),
        (status = 404, description = "No post with that id")
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> AppResult<StatusCode> {
    let password = headers
        .get("password")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::bad_request("password header is required"))?;

    state.post_service.delete_post(id, password).await?;
    Ok(StatusCode::NO_CONTENT)
}
