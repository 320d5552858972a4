//! Repository for the `visits` and `visit_photos` tables.

use junrei_core::types::DbId;
use junrei_core::upload::VISIT_PHOTO_BUCKET;
use sqlx::PgPool;

use crate::models::visit::{CreateVisit, Visit, VisitPhoto, VisitSummary};

/// Column list for `visits` queries.
const COLUMNS: &str = "id, user_id, place_id, visited_at, note, photos_count, created_at";

/// Column list for `visit_photos` queries.
const PHOTO_COLUMNS: &str = "id, visit_id, path, storage_bucket, mime_type, created_at";

/// Provides access to visits and their photos.
pub struct VisitRepo;

impl VisitRepo {
    /// Record a visit for `user_id`, returning the full row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateVisit,
    ) -> Result<Visit, sqlx::Error> {
        let query = format!(
            "INSERT INTO visits (user_id, place_id, visited_at, note) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(user_id)
            .bind(input.place_id)
            .bind(input.visited_at)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Find a visit only if it belongs to `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Visit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visits WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Visit>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Distinct places the user has visited at least once.
    pub async fn visited_place_ids(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT place_id FROM visits WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// The user's visits to one place, newest `visited_at` first.
    pub async fn list_for_place_by_user(
        pool: &PgPool,
        place_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<VisitSummary>, sqlx::Error> {
        sqlx::query_as::<_, VisitSummary>(
            "SELECT id, visited_at, note, photos_count FROM visits \
             WHERE place_id = $1 AND user_id = $2 \
             ORDER BY visited_at DESC NULLS LAST, created_at DESC",
        )
        .bind(place_id)
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Attach uploaded photos to a visit and set `photos_count` to `paths.len()`.
    ///
    /// The count is overwritten, not incremented. Inserts and the count
    /// update commit together.
    pub async fn finalize_photos(
        pool: &PgPool,
        visit_id: DbId,
        paths: &[String],
    ) -> Result<Vec<VisitPhoto>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut photos = Vec::with_capacity(paths.len());

        let query = format!(
            "INSERT INTO visit_photos (visit_id, path, storage_bucket) \
             VALUES ($1, $2, $3) \
             RETURNING {PHOTO_COLUMNS}"
        );
        for path in paths {
            let photo = sqlx::query_as::<_, VisitPhoto>(&query)
                .bind(visit_id)
                .bind(path)
                .bind(VISIT_PHOTO_BUCKET)
                .fetch_one(&mut *tx)
                .await?;
            photos.push(photo);
        }

        sqlx::query("UPDATE visits SET photos_count = $1 WHERE id = $2")
            .bind(paths.len() as i32)
            .bind(visit_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(photos)
    }

    /// All photos attached to a visit, oldest first.
    pub async fn list_photos(pool: &PgPool, visit_id: DbId) -> Result<Vec<VisitPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM visit_photos WHERE visit_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, VisitPhoto>(&query)
            .bind(visit_id)
            .fetch_all(pool)
            .await
    }
}
