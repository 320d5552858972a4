//! Handlers for place queries: the map viewport and the place detail page.

use axum::extract::{Path, Query, State};
use axum::Json;
use junrei_core::error::CoreError;
use junrei_core::geo::BoundingBox;
use junrei_core::places::{group_features, parse_mission_slugs, PlaceFeature, MAX_PLACE_ROWS};
use junrei_db::models::mission::Mission;
use junrei_db::models::place::Place;
use junrei_db::models::visit::VisitSummary;
use junrei_db::repositories::{MissionRepo, PlaceRepo, VisitRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::parse_id;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the viewport query.
#[derive(Debug, Deserialize)]
pub struct PlacesParams {
    /// `minLng,minLat,maxLng,maxLat`.
    pub bbox: Option<String>,
    /// Comma-separated mission slugs.
    pub missions: Option<String>,
}

/// A place with every mission that includes it.
#[derive(Debug, Serialize)]
pub struct PlaceDetail {
    pub place: Place,
    pub missions: Vec<Mission>,
}

// ---------------------------------------------------------------------------
// GET /places?bbox=...&missions=...
// ---------------------------------------------------------------------------

/// Places inside the bounding box that belong to any selected mission.
///
/// An empty mission selection answers `[]` without querying the database.
pub async fn list_places(
    State(state): State<AppState>,
    Query(params): Query<PlacesParams>,
) -> AppResult<Json<Vec<PlaceFeature<Place>>>> {
    let raw_bbox = params
        .bbox
        .as_deref()
        .ok_or_else(|| CoreError::Validation("Invalid bounding box".into()))?;
    let bbox = BoundingBox::parse(raw_bbox)?;

    let slugs = parse_mission_slugs(params.missions.as_deref());
    if slugs.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let rows = PlaceRepo::list_in_bbox(&state.pool, &bbox, &slugs, MAX_PLACE_ROWS).await?;
    let features = group_features(
        rows.into_iter()
            .map(|row| (row.place.id, row.place, row.mission_slug)),
    );

    Ok(Json(features))
}

// ---------------------------------------------------------------------------
// GET /places/{id}
// ---------------------------------------------------------------------------

/// A single place and the missions it belongs to.
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PlaceDetail>> {
    let place_id = parse_id("Place", &id)?;
    let place = PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Place", place_id)))?;
    let missions = MissionRepo::list_for_place(&state.pool, place_id).await?;

    Ok(Json(PlaceDetail { place, missions }))
}

// ---------------------------------------------------------------------------
// GET /places/{id}/visits
// ---------------------------------------------------------------------------

/// The caller's own visits to a place, newest first.
pub async fn list_place_visits(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<VisitSummary>>> {
    let place_id = parse_id("Place", &id)?;
    if !PlaceRepo::exists(&state.pool, place_id).await? {
        return Err(CoreError::not_found("Place", place_id).into());
    }

    let visits = VisitRepo::list_for_place_by_user(&state.pool, place_id, auth.user_id).await?;
    Ok(Json(visits))
}
