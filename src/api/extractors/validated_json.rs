//! Validated JSON extractor - Combines deserialization with validation.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Validated JSON extractor that rejects invalid payloads before the
/// handler runs, shaping failures as a field -> message map.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(field_messages(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Collapse validator output into one message per failing field.
pub fn field_messages(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostRequest;

    #[test]
    fn all_blank_request_yields_three_fixed_messages() {
        let request = PostRequest {
            name: String::new(),
            password: String::new(),
            title: String::new(),
            content: String::new(),
        };

        let errors = request.validate().unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages["name"], "name must be at least 2 characters");
        assert_eq!(
            messages["password"],
            "password must be at least 4 characters"
        );
        assert_eq!(messages["title"], "title is required");
    }

    #[test]
    fn single_failing_field_is_reported_alone() {
        let request = PostRequest {
            name: "t".to_string(),
            password: "testPassword".to_string(),
            title: "test Title".to_string(),
            content: String::new(),
        };

        let errors = request.validate().unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages["name"], "name must be at least 2 characters");
    }
}
