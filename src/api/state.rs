//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::domain::Argon2Hasher;
use crate::infra::{Database, PostStore};
use crate::services::{PostManager, PostService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the default collaborators: Argon2 hashing and the SeaORM store.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repository = Arc::new(PostStore::new(database.get_connection()));
        let hasher = Arc::new(Argon2Hasher::new());
        let post_service = Arc::new(PostManager::new(repository, hasher));

        Self {
            post_service,
            database,
        }
    }

    /// Create application state with a manually injected service
    /// (used by tests to substitute stubs).
    pub fn new(post_service: Arc<dyn PostService>, database: Arc<Database>) -> Self {
        Self {
            post_service,
            database,
        }
    }
}
