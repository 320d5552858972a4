//! Repository for unlocked badges.

use junrei_core::types::DbId;
use sqlx::PgPool;

use crate::models::badge::UnlockedBadge;

/// Read access to `user_badges` joined with `badges`.
pub struct BadgeRepo;

impl BadgeRepo {
    /// Badges the user has unlocked, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UnlockedBadge>, sqlx::Error> {
        sqlx::query_as::<_, UnlockedBadge>(
            "SELECT ub.id, ub.unlocked_at, \
                    b.id AS badge_id, b.slug AS badge_slug, \
                    b.title AS badge_title, b.description AS badge_description \
             FROM user_badges ub \
             JOIN badges b ON b.id = ub.badge_id \
             WHERE ub.user_id = $1 \
             ORDER BY ub.unlocked_at DESC, ub.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
