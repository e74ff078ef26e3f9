//! Custom axum extractors.

mod validated_json;

pub use validated_json::{field_messages, ValidatedJson};
