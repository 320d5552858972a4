//! Route definitions for badges.

use axum::routing::get;
use axum::Router;

use crate::handlers::badges;
use crate::state::AppState;

/// Badge routes, merged at the `/api` root.
///
/// ```text
/// GET    /me/badges             -> list_my_badges (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me/badges", get(badges::list_my_badges))
}
