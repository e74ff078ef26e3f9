//! Domain layer - core business entities and logic.

mod password;
mod post;

pub use password::{Argon2Hasher, PasswordHasher};
pub use post::{NewPost, Post, PostRequest, PostResponse};
