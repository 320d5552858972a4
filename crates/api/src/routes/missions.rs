//! Route definitions for the mission catalog.
//!
//! Mounted at `/missions` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::missions;
use crate::state::AppState;

/// Mission routes.
///
/// ```text
/// GET    /                  -> list_missions
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(missions::list_missions))
}
