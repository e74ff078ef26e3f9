//! Board API - a minimal bulletin-board post backend.
//!
//! Posts are created with an ownership password; updating or deleting a
//! post requires submitting that password again. The crate follows a
//! conventional layered layout:
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Post entity, request/response projections, password hashing
//! - **services**: Post business rules
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, routes, and extractors
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Post, PostRequest, PostResponse};
pub use errors::{AppError, AppResult};
