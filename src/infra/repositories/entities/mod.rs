//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod post;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use post::{ActiveModel as PostActiveModel, Entity as PostEntity, Model as PostModel};
