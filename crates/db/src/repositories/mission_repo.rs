//! Repository for the `missions` table.

use junrei_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::Mission;

/// Column list for `missions` queries.
const COLUMNS: &str = "id, slug, title, color";

/// Read access to the mission catalog.
pub struct MissionRepo;

impl MissionRepo {
    /// All missions in display order.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY sort_index, slug");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }

    /// Missions whose slug is in `slugs`. Unknown slugs are simply absent.
    pub async fn find_by_slugs(pool: &PgPool, slugs: &[String]) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missions WHERE slug = ANY($1) ORDER BY sort_index, slug"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(slugs)
            .fetch_all(pool)
            .await
    }

    /// Find a mission by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Missions that include the given place, in display order.
    pub async fn list_for_place(pool: &PgPool, place_id: DbId) -> Result<Vec<Mission>, sqlx::Error> {
        sqlx::query_as::<_, Mission>(
            "SELECT m.id, m.slug, m.title, m.color \
             FROM missions m \
             JOIN mission_places mp ON mp.mission_id = m.id \
             WHERE mp.place_id = $1 \
             ORDER BY m.sort_index, m.slug",
        )
        .bind(place_id)
        .fetch_all(pool)
        .await
    }

    /// The position of a mission in display order, used to pick a fallback color.
    pub async fn display_index(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT idx FROM ( \
                 SELECT id, ROW_NUMBER() OVER (ORDER BY sort_index, slug) - 1 AS idx \
                 FROM missions \
             ) ranked WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
