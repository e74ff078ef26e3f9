//! Post service - the bulletin board's business rules.
//!
//! Owns the only domain decisions in the system: building posts from
//! requests, checking the ownership password on mutation, and raising
//! domain errors. Collaborators arrive as interface-typed constructor
//! arguments so tests can substitute them freely.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewPost, PasswordHasher, PostRequest, PostResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::PostRepository;

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Hash the password and persist a new post.
    async fn create_post(&self, request: PostRequest) -> AppResult<PostResponse>;

    /// All posts, newest first. An empty board is an empty list, not an error.
    async fn get_posts(&self) -> AppResult<Vec<PostResponse>>;

    /// Single post by id.
    async fn get_post(&self, id: i64) -> AppResult<PostResponse>;

    /// Overwrite name/title/content after verifying the ownership password.
    async fn update_post(&self, id: i64, request: PostRequest) -> AppResult<PostResponse>;

    /// Remove a post after verifying the ownership password.
    async fn delete_post(&self, id: i64, password: &str) -> AppResult<()>;
}

/// Concrete implementation of [`PostService`].
pub struct PostManager {
    repository: Arc<dyn PostRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl PostManager {
    /// Create a new post service with injected collaborators.
    pub fn new(repository: Arc<dyn PostRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Look up a post or fail with the fixed not-found message.
    async fn find_existing(&self, id: i64) -> AppResult<crate::domain::Post> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("no post found"))
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(&self, request: PostRequest) -> AppResult<PostResponse> {
        let password_hash = self.hasher.hash(&request.password)?;

        let post = self
            .repository
            .insert(NewPost {
                name: request.name,
                password_hash,
                title: request.title,
                content: request.content,
            })
            .await?;

        tracing::debug!(post_id = post.id, "Post created");
        Ok(post.into())
    }

    async fn get_posts(&self) -> AppResult<Vec<PostResponse>> {
        let posts = self.repository.find_newest_first().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn get_post(&self, id: i64) -> AppResult<PostResponse> {
        Ok(self.find_existing(id).await?.into())
    }

    async fn update_post(&self, id: i64, request: PostRequest) -> AppResult<PostResponse> {
        // Existence is checked before the password so a missing post never
        // surfaces as a password mismatch.
        let mut post = self.find_existing(id).await?;

        if !self.hasher.verify(&request.password, &post.password_hash) {
            return Err(AppError::InvalidPassword);
        }

        post.apply(&request);
        let updated = self.repository.update(post).await?;

        tracing::debug!(post_id = updated.id, "Post updated");
        Ok(updated.into())
    }

    async fn delete_post(&self, id: i64, password: &str) -> AppResult<()> {
        let post = self.find_existing(id).await?;

        if !self.hasher.verify(password, &post.password_hash) {
            return Err(AppError::InvalidPassword);
        }

        self.repository.delete(post.id).await?;

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}
