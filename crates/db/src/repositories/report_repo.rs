//! Repository for the `reports` table.

use junrei_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{CreateReport, Report};

/// Column list for `reports` queries.
const COLUMNS: &str = "id, user_id, target_type, target_id, reason, created_at";

/// Write access to the moderation queue.
pub struct ReportRepo;

impl ReportRepo {
    /// File a new report, returning the full row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateReport,
    ) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (user_id, target_type, target_id, reason) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(user_id)
            .bind(&input.target_type)
            .bind(&input.target_id)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }
}
