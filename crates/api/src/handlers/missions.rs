//! Handler for the mission catalog.

use axum::extract::State;
use axum::Json;
use junrei_db::models::mission::Mission;
use junrei_db::repositories::MissionRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /missions
// ---------------------------------------------------------------------------

/// List every mission in display order.
pub async fn list_missions(State(state): State<AppState>) -> AppResult<Json<Vec<Mission>>> {
    let missions = MissionRepo::list_ordered(&state.pool).await?;
    Ok(Json(missions))
}
