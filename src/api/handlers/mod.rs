//! HTTP request handlers.

pub mod post_handler;

pub use post_handler::post_routes;
