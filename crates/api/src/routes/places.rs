//! Route definitions for places.
//!
//! Mounted at `/places` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::places;
use crate::state::AppState;

/// Place routes.
///
/// ```text
/// GET    /                  -> list_places
/// GET    /{id}              -> get_place
/// GET    /{id}/visits       -> list_place_visits (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(places::list_places))
        .route("/{id}", get(places::get_place))
        .route("/{id}/visits", get(places::list_place_visits))
}
