//! Badge models.

use junrei_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Public view of a row from the `badges` table.
///
/// The unlock `condition` stays in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
}

/// A `user_badges` row joined with its badge.
#[derive(Debug, Clone, FromRow)]
pub struct UnlockedBadge {
    pub id: DbId,
    pub unlocked_at: Timestamp,
    pub badge_id: DbId,
    pub badge_slug: String,
    pub badge_title: String,
    pub badge_description: Option<String>,
}

impl UnlockedBadge {
    pub fn badge(&self) -> Badge {
        Badge {
            id: self.badge_id,
            slug: self.badge_slug.clone(),
            title: self.badge_title.clone(),
            description: self.badge_description.clone(),
        }
    }
}
