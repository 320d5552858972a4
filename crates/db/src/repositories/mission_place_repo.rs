//! Repository for the `mission_places` membership table.

use junrei_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::MissionPlace;

/// Read access to mission membership.
pub struct MissionPlaceRepo;

impl MissionPlaceRepo {
    /// Membership pairs for the given missions, in each mission's place order.
    pub async fn list_for_missions(
        pool: &PgPool,
        mission_ids: &[DbId],
    ) -> Result<Vec<MissionPlace>, sqlx::Error> {
        sqlx::query_as::<_, MissionPlace>(
            "SELECT mission_id, place_id FROM mission_places \
             WHERE mission_id = ANY($1) \
             ORDER BY mission_id, order_index NULLS LAST, place_id",
        )
        .bind(mission_ids)
        .fetch_all(pool)
        .await
    }
}
