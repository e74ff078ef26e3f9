//! OpenAPI documentation definitions.

use utoipa::OpenApi;

use crate::api::handlers::post_handler;
use crate::domain::{PostRequest, PostResponse};

/// OpenAPI document for the post endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Board API",
        description = "Bulletin board post API with password-protected mutations"
    ),
    paths(
        post_handler::create_post,
        post_handler::get_posts,
        post_handler::get_post,
        post_handler::update_post,
        post_handler::delete_post,
    ),
    components(schemas(PostRequest, PostResponse)),
    tags((name = "Posts", description = "Bulletin board post endpoints"))
)]
pub struct ApiDoc;
