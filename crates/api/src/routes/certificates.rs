//! Route definitions for certificates.
//!
//! Merged into `api_routes()` because the two paths do not share a prefix.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::certificates;
use crate::state::AppState;

/// Certificate routes.
///
/// ```text
/// POST   /certificate           -> issue_certificate (auth)
/// GET    /me/certificates       -> list_my_certificates (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/certificate", post(certificates::issue_certificate))
        .route("/me/certificates", get(certificates::list_my_certificates))
}
