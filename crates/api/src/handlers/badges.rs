//! Handler for the caller's unlocked badges.

use axum::extract::State;
use axum::Json;
use junrei_core::types::{DbId, Timestamp};
use junrei_db::models::badge::Badge;
use junrei_db::repositories::BadgeRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// One unlocked badge.
#[derive(Debug, Serialize)]
pub struct UnlockedBadgeItem {
    pub id: DbId,
    pub unlocked_at: Timestamp,
    pub badge: Badge,
}

// ---------------------------------------------------------------------------
// GET /me/badges
// ---------------------------------------------------------------------------

/// The caller's unlocked badges, most recent first.
pub async fn list_my_badges(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UnlockedBadgeItem>>> {
    let rows = BadgeRepo::list_for_user(&state.pool, auth.user_id).await?;

    let items = rows
        .into_iter()
        .map(|row| UnlockedBadgeItem {
            badge: row.badge(),
            id: row.id,
            unlocked_at: row.unlocked_at,
        })
        .collect();

    Ok(Json(items))
}
