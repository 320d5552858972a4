//! Repository for the `certificates` table.

use junrei_core::types::DbId;
use sqlx::PgPool;

use crate::models::certificate::{Certificate, CertificateWithMission};

/// Column list for `certificates` queries.
const COLUMNS: &str = "id, user_id, mission_id, image_path, created_at";

/// Provides access to issued certificates.
pub struct CertificateRepo;

impl CertificateRepo {
    /// Record an issued certificate.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        mission_id: DbId,
        image_path: &str,
    ) -> Result<Certificate, sqlx::Error> {
        let query = format!(
            "INSERT INTO certificates (user_id, mission_id, image_path) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(user_id)
            .bind(mission_id)
            .bind(image_path)
            .fetch_one(pool)
            .await
    }

    /// A user's certificates with their missions, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CertificateWithMission>, sqlx::Error> {
        sqlx::query_as::<_, CertificateWithMission>(
            "SELECT c.id, c.image_path, c.created_at, \
                    m.id AS mission_id, m.slug AS mission_slug, \
                    m.title AS mission_title, m.color AS mission_color \
             FROM certificates c \
             JOIN missions m ON m.id = c.mission_id \
             WHERE c.user_id = $1 \
             ORDER BY c.created_at DESC, c.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
