//! Handler for moderation reports.

use axum::extract::State;
use axum::Json;
use junrei_core::report;
use junrei_core::visit::require_non_empty;
use junrei_db::models::report::CreateReport;
use junrei_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::extract::{check_body, ApiJson};
use crate::middleware::auth::AuthUser;
use crate::response::OkResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /report
// ---------------------------------------------------------------------------

/// Flag a visit or place for moderation.
pub async fn submit_report(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateReport>,
) -> AppResult<Json<OkResponse>> {
    check_body(|| {
        report::validate_target_type(&input.target_type)?;
        require_non_empty("target_id", &input.target_id)?;
        report::validate_reason(&input.reason)
    })?;

    let created = ReportRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        report_id = %created.id,
        user_id = %auth.user_id,
        target_type = %created.target_type,
        target_id = %created.target_id,
        "Report submitted",
    );

    Ok(Json(OkResponse::ok()))
}
