//! Handlers for recording visits and attaching photos.
//!
//! Photos are attached in two steps. The client first asks for signed
//! upload URLs and PUTs each file directly to storage, then calls finalize
//! with the stored paths. Both steps require the visit to belong to the
//! caller; anything else looks like a missing visit.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use junrei_core::error::CoreError;
use junrei_core::types::DbId;
use junrei_core::upload::{visit_photo_path, UPLOAD_URL_TTL, VISIT_PHOTO_BUCKET};
use junrei_core::visit::{require_non_empty, validate_note, validate_photo_count};
use junrei_db::models::visit::{CreateVisit, Visit};
use junrei_db::repositories::{PlaceRepo, VisitRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{check_body, parse_id, ApiJson};
use crate::middleware::auth::AuthUser;
use crate::response::{OkResponse, VisitCreated};
use crate::state::AppState;

/// A file the client intends to upload.
#[derive(Debug, Deserialize)]
pub struct UploadFile {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Request body for `POST /visit/{id}/photos/signed-url`.
#[derive(Debug, Deserialize)]
pub struct SignedUrlRequest {
    pub files: Vec<UploadFile>,
}

/// Where to PUT one file.
#[derive(Debug, Serialize)]
pub struct SignedUpload {
    pub path: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlResponse {
    pub signed_urls: Vec<SignedUpload>,
}

/// Request body for `POST /visit/{id}/finalize`.
#[derive(Debug, Deserialize)]
pub struct FinalizeRequest {
    pub paths: Vec<String>,
}

/// Load a visit owned by the caller, or 404.
async fn find_owned_visit(state: &AppState, raw_id: &str, user_id: DbId) -> AppResult<Visit> {
    let visit_id = parse_id("Visit", raw_id)?;
    VisitRepo::find_owned(&state.pool, visit_id, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Visit", visit_id)))
}

// ---------------------------------------------------------------------------
// POST /visit
// ---------------------------------------------------------------------------

/// Record a visit to a place.
pub async fn create_visit(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateVisit>,
) -> AppResult<Json<VisitCreated>> {
    check_body(|| input.note.as_deref().map_or(Ok(()), validate_note))?;
    if !PlaceRepo::exists(&state.pool, input.place_id).await? {
        return Err(CoreError::not_found("Place", input.place_id).into());
    }

    let visit = VisitRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        visit_id = %visit.id,
        user_id = %auth.user_id,
        place_id = %visit.place_id,
        "Visit recorded",
    );

    Ok(Json(VisitCreated {
        ok: true,
        visit_id: visit.id,
    }))
}

// ---------------------------------------------------------------------------
// POST /visit/{id}/photos/signed-url
// ---------------------------------------------------------------------------

/// Issue one signed upload URL per requested file.
///
/// URLs are signed in order; if one fails the request fails and the URLs
/// already signed simply expire.
pub async fn create_signed_upload_urls(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<SignedUrlRequest>,
) -> AppResult<Json<SignedUrlResponse>> {
    check_body(|| {
        validate_photo_count(input.files.len())?;
        for file in &input.files {
            require_non_empty("name", &file.name)?;
            require_non_empty("type", &file.content_type)?;
        }
        Ok(())
    })?;

    let visit = find_owned_visit(&state, &id, auth.user_id).await?;

    let uploaded_at_ms = Utc::now().timestamp_millis();
    let mut signed_urls = Vec::with_capacity(input.files.len());
    for (index, file) in input.files.iter().enumerate() {
        let path = visit_photo_path(auth.user_id, visit.id, uploaded_at_ms, index, &file.name);
        let url = state
            .storage
            .signed_upload_url(VISIT_PHOTO_BUCKET, &path, UPLOAD_URL_TTL)
            .await?;
        signed_urls.push(SignedUpload { path, url });
    }

    tracing::info!(
        visit_id = %visit.id,
        user_id = %auth.user_id,
        count = signed_urls.len(),
        "Signed photo upload URLs",
    );

    Ok(Json(SignedUrlResponse { signed_urls }))
}

// ---------------------------------------------------------------------------
// POST /visit/{id}/finalize
// ---------------------------------------------------------------------------

/// Attach uploaded photos to the visit.
///
/// `photos_count` is set to the number of paths in this request.
pub async fn finalize_visit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<FinalizeRequest>,
) -> AppResult<Json<OkResponse>> {
    check_body(|| {
        validate_photo_count(input.paths.len())?;
        input
            .paths
            .iter()
            .try_for_each(|path| require_non_empty("paths", path))
    })?;

    let visit = find_owned_visit(&state, &id, auth.user_id).await?;
    let photos = VisitRepo::finalize_photos(&state.pool, visit.id, &input.paths).await?;

    tracing::info!(
        visit_id = %visit.id,
        user_id = %auth.user_id,
        photos_count = photos.len(),
        "Visit photos finalized",
    );

    Ok(Json(OkResponse::ok()))
}
