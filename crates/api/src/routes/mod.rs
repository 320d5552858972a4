pub mod badges;
pub mod certificates;
pub mod health;
pub mod missions;
pub mod places;
pub mod progress;
pub mod reports;
pub mod visits;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /missions                          list missions (public)
///
/// /places                            viewport query (public)
/// /places/{id}                       place detail (public)
/// /places/{id}/visits                caller's visits to the place
///
/// /progress                          per-mission progress (POST)
///
/// /visit                             record a visit (POST)
/// /visit/{id}/photos/signed-url      signed upload URLs (POST)
/// /visit/{id}/finalize               attach uploaded photos (POST)
///
/// /certificate                       issue a certificate (POST)
/// /me/certificates                   caller's certificates
/// /me/badges                         caller's unlocked badges
///
/// /report                            file a moderation report (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/missions", missions::router())
        .nest("/places", places::router())
        .nest("/progress", progress::router())
        .nest("/visit", visits::router())
        .merge(certificates::router())
        .merge(badges::router())
        .nest("/report", reports::router())
}
