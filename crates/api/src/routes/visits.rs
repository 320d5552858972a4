//! Route definitions for visits.
//!
//! Mounted at `/visit` by `api_routes()`. Every route requires auth.

use axum::routing::post;
use axum::Router;

use crate::handlers::visits;
use crate::state::AppState;

/// Visit routes.
///
/// ```text
/// POST   /                          -> create_visit
/// POST   /{id}/photos/signed-url    -> create_signed_upload_urls
/// POST   /{id}/finalize             -> finalize_visit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(visits::create_visit))
        .route(
            "/{id}/photos/signed-url",
            post(visits::create_signed_upload_urls),
        )
        .route("/{id}/finalize", post(visits::finalize_visit))
}
