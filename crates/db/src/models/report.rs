//! Moderation report model and DTO.

use junrei_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub user_id: DbId,
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
    pub created_at: Timestamp,
}

/// DTO for filing a report.
#[derive(Debug, Deserialize)]
pub struct CreateReport {
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
}
