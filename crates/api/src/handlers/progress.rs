//! Handler for per-mission completion progress.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use junrei_core::error::CoreError;
use junrei_core::progress::{aggregate, MissionKey, ProgressReport};
use junrei_db::repositories::{MissionPlaceRepo, MissionRepo, VisitRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{check_body, ApiJson};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /progress`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    pub mission_slugs: Vec<String>,
}

// ---------------------------------------------------------------------------
// POST /progress
// ---------------------------------------------------------------------------

/// Completion progress of the caller for each requested mission.
///
/// Unknown slugs are dropped. When none resolve, the empty report is
/// returned without reading memberships or visits.
pub async fn get_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProgressRequest>,
) -> AppResult<Json<ProgressReport>> {
    check_body(|| {
        if input.mission_slugs.is_empty() {
            return Err(CoreError::Validation("'missionSlugs' must not be empty".into()));
        }
        Ok(())
    })?;

    let missions = MissionRepo::find_by_slugs(&state.pool, &input.mission_slugs).await?;
    if missions.is_empty() {
        return Ok(Json(ProgressReport::default()));
    }

    let mission_ids: Vec<_> = missions.iter().map(|m| m.id).collect();
    let (memberships, visited) = tokio::try_join!(
        MissionPlaceRepo::list_for_missions(&state.pool, &mission_ids),
        VisitRepo::visited_place_ids(&state.pool, auth.user_id),
    )?;

    let resolved: Vec<MissionKey> = missions
        .into_iter()
        .map(|m| MissionKey {
            id: m.id,
            slug: m.slug,
        })
        .collect();
    let memberships: Vec<_> = memberships
        .into_iter()
        .map(|row| (row.mission_id, row.place_id))
        .collect();
    let visited: HashSet<_> = visited.into_iter().collect();

    let report = aggregate(&input.mission_slugs, &resolved, &memberships, &visited);

    tracing::debug!(
        user_id = %auth.user_id,
        missions = report.by_mission.len(),
        visited = report.visited_all_place_ids.len(),
        "Computed progress",
    );

    Ok(Json(report))
}
