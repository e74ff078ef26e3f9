//! Post domain entity and request/response projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub name: String,
    /// One-way hash of the ownership password; set once at creation
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Overwrite the caller-editable fields from an update request.
    /// Id, password hash and creation time stay untouched.
    pub fn apply(&mut self, request: &PostRequest) {
        self.name = request.name.clone();
        self.title = request.title.clone();
        self.content = request.content.clone();
    }
}

/// Insert payload handed to the repository.
///
/// The store assigns id and creation time, so neither appears here.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub name: String,
    pub password_hash: String,
    pub title: String,
    pub content: String,
}

/// Incoming post payload (create and update)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PostRequest {
    /// Display name of the author
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    #[schema(example = "testName")]
    pub name: String,
    /// Ownership password, hashed at creation and never persisted in plaintext
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    #[schema(example = "testPassword", min_length = 4)]
    pub password: String,
    #[validate(custom(function = "title_not_blank"))]
    #[schema(example = "test Title")]
    pub title: String,
    /// Free-form body, may be empty
    #[schema(example = "test Content")]
    pub content: String,
}

/// Titles of only whitespace count as missing
fn title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("title is required".into());
        return Err(error);
    }
    Ok(())
}

/// Post response projection (safe to return to clients)
///
/// Deliberately omits the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: i64,
    #[schema(example = "testName")]
    pub name: String,
    #[schema(example = "test Title")]
    pub title: String,
    #[schema(example = "test Content")]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            name: post.name,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, password: &str, title: &str, content: &str) -> PostRequest {
        PostRequest {
            name: name.to_string(),
            password: password.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        let request = request("testName", "testPassword", "test Title", "test Content");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_content_is_allowed() {
        let request = request("testName", "testPassword", "test Title", "");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn blank_fields_fail_with_fixed_messages() {
        let errors = request("", "", "", "").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("title"));
    }

    #[test]
    fn whitespace_only_title_is_rejected() {
        let errors = request("testName", "testPassword", "   ", "body")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn projection_never_carries_the_hash() {
        let post = Post {
            id: 7,
            name: "testName".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            title: "test Title".to_string(),
            content: "test Content".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn apply_overwrites_editable_fields_only() {
        let created_at = Utc::now();
        let mut post = Post {
            id: 1,
            name: "old".to_string(),
            password_hash: "hash".to_string(),
            title: "old title".to_string(),
            content: "old content".to_string(),
            created_at,
        };

        post.apply(&request("new", "ignored", "new title", "new content"));

        assert_eq!(post.name, "new");
        assert_eq!(post.title, "new title");
        assert_eq!(post.content, "new content");
        assert_eq!(post.id, 1);
        assert_eq!(post.password_hash, "hash");
        assert_eq!(post.created_at, created_at);
    }
}
