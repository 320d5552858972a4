//! Liveness handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `outline` when a font file was loaded, `bitmap` on the built-in fallback.
    pub certificate_font: &'static str,
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Always 200; a dead database only degrades the status.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = match junrei_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthStatus {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        certificate_font: if state.certificates.is_bitmap() {
            "bitmap"
        } else {
            "outline"
        },
    })
}
