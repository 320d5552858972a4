//! Route definitions for moderation reports.
//!
//! Mounted at `/report` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// POST   /                  -> submit_report (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reports::submit_report))
}
