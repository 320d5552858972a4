//! Repository for the `places` table.

use junrei_core::geo::BoundingBox;
use junrei_core::types::DbId;
use sqlx::PgPool;

use crate::models::place::{Place, PlaceMissionRow};

/// Column list for `places` queries.
const COLUMNS: &str = "id, name, latitude, longitude, prefecture, address";

/// Read access to places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Find a place by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a place with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM places WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Places inside `bbox` that belong to any mission in `slugs`.
    ///
    /// One row per `(place, mission)` pair, ordered by mission display order
    /// then membership order, capped at `limit` rows.
    pub async fn list_in_bbox(
        pool: &PgPool,
        bbox: &BoundingBox,
        slugs: &[String],
        limit: i64,
    ) -> Result<Vec<PlaceMissionRow>, sqlx::Error> {
        sqlx::query_as::<_, PlaceMissionRow>(
            "SELECT p.id, p.name, p.latitude, p.longitude, p.prefecture, p.address, \
                    m.slug AS mission_slug \
             FROM mission_places mp \
             JOIN places p ON p.id = mp.place_id \
             JOIN missions m ON m.id = mp.mission_id \
             WHERE p.longitude >= $1 AND p.latitude >= $2 \
               AND p.longitude <= $3 AND p.latitude <= $4 \
               AND m.slug = ANY($5) \
             ORDER BY m.sort_index, mp.order_index NULLS LAST, p.id \
             LIMIT $6",
        )
        .bind(bbox.min_lng)
        .bind(bbox.min_lat)
        .bind(bbox.max_lng)
        .bind(bbox.max_lat)
        .bind(slugs)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
