//! Handlers for completion certificates.
//!
//! Issuing renders a PNG, uploads it to the `certificates` bucket, records
//! the row and returns a week-long download URL. Completion itself is not
//! re-checked here; the client requests a certificate once progress
//! reports the mission as done.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use junrei_core::certificate::{
    certificate_path, format_achievement_date, CertificateDetails, CERTIFICATE_BUCKET,
    ISSUED_URL_TTL, LISTING_URL_TTL,
};
use junrei_core::error::CoreError;
use junrei_core::missions::accent_rgb;
use junrei_core::types::{DbId, Timestamp};
use junrei_db::models::mission::Mission;
use junrei_db::repositories::{CertificateRepo, MissionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, ApiJson};
use crate::middleware::auth::AuthUser;
use crate::response::UrlResponse;
use crate::state::AppState;

/// Request body for `POST /certificate`.
#[derive(Debug, Deserialize)]
pub struct IssueCertificate {
    pub mission_id: String,
}

/// One entry of the caller's certificate listing.
#[derive(Debug, Serialize)]
pub struct CertificateListItem {
    pub id: DbId,
    pub created_at: Timestamp,
    pub image_path: String,
    pub mission: Mission,
    /// Short-lived download URL; `null` when signing failed.
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /certificate
// ---------------------------------------------------------------------------

/// Render, store and record a certificate for one mission.
pub async fn issue_certificate(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<IssueCertificate>,
) -> AppResult<Json<UrlResponse>> {
    let mission_id = parse_id("Mission", &input.mission_id)?;
    let mission = MissionRepo::find_by_id(&state.pool, mission_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Mission", mission_id)))?;
    let display_index = MissionRepo::display_index(&state.pool, mission_id)
        .await?
        .unwrap_or(0);

    let issued_at = Utc::now();
    let achieved_on =
        format_achievement_date(issued_at, state.config.certificate.utc_offset_hours);
    let accent = accent_rgb(mission.color.as_deref(), display_index as usize);
    let user_label = auth.label();

    let renderer = state.certificates.clone();
    let title = mission.title.clone();
    let png = tokio::task::spawn_blocking(move || {
        renderer.render(&CertificateDetails {
            mission_title: &title,
            user_label: &user_label,
            achieved_on: &achieved_on,
            accent,
        })
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Certificate render task failed: {e}")))??;

    let path = certificate_path(auth.user_id, mission_id, issued_at.timestamp_millis());
    state
        .storage
        .put_object(CERTIFICATE_BUCKET, &path, png, "image/png")
        .await?;

    let certificate = CertificateRepo::create(&state.pool, auth.user_id, mission_id, &path).await?;

    let url = state
        .storage
        .signed_download_url(CERTIFICATE_BUCKET, &path, ISSUED_URL_TTL)
        .await?;

    tracing::info!(
        certificate_id = %certificate.id,
        user_id = %auth.user_id,
        mission_id = %mission_id,
        path = %path,
        "Certificate issued",
    );

    Ok(Json(UrlResponse { url }))
}

// ---------------------------------------------------------------------------
// GET /me/certificates
// ---------------------------------------------------------------------------

/// The caller's certificates, newest first, each with a one-hour URL.
///
/// A signing failure only blanks that entry's `url`.
pub async fn list_my_certificates(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CertificateListItem>>> {
    let rows = CertificateRepo::list_for_user(&state.pool, auth.user_id).await?;

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let url = match state
            .storage
            .signed_download_url(CERTIFICATE_BUCKET, &row.image_path, LISTING_URL_TTL)
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(certificate_id = %row.id, error = %e, "Failed to sign certificate URL");
                None
            }
        };
        let mission = row.mission();
        items.push(CertificateListItem {
            id: row.id,
            created_at: row.created_at,
            image_path: row.image_path,
            mission,
            url,
        });
    }

    Ok(Json(items))
}
