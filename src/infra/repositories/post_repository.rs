//! Post repository - persistence contract and SeaORM-backed store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::post::{self, Entity as PostEntity};
use crate::domain::{NewPost, Post};
use crate::errors::AppResult;

/// Storage collaborator for posts.
///
/// The store owns id assignment and creation timestamps; callers hand in
/// already-hashed passwords and get fully populated posts back.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post; the store assigns id and creation time.
    async fn insert(&self, post: NewPost) -> AppResult<Post>;

    /// All posts, newest first. Id breaks created_at ties so the order
    /// is deterministic.
    async fn find_newest_first(&self) -> AppResult<Vec<Post>>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>>;

    /// Persist the current field values of an existing post.
    async fn update(&self, post: Post) -> AppResult<Post>;

    /// Remove a post by its id.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM implementation of [`PostRepository`].
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn insert(&self, post: NewPost) -> AppResult<Post> {
        let model = post::ActiveModel {
            name: Set(post.name),
            password_hash: Set(post.password_hash),
            title: Set(post.title),
            content: Set(post.content),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await?;
        Ok(saved.into())
    }

    async fn find_newest_first(&self) -> AppResult<Vec<Post>> {
        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        let model = PostEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, post: Post) -> AppResult<Post> {
        let model: post::ActiveModel = post.into();
        let saved = model.update(&self.db).await?;
        Ok(saved.into())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        PostEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
