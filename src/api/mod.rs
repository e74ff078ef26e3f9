//! API layer - HTTP surface of the application.

pub mod extractors;
pub mod handlers;
mod openapi;
mod routes;
mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
