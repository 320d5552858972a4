//! Route definitions for progress.
//!
//! Mounted at `/progress` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Progress routes.
///
/// ```text
/// POST   /                  -> get_progress (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(progress::get_progress))
}
