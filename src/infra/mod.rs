//! Infrastructure layer - database and data access.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{PostRepository, PostStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockPostRepository;
