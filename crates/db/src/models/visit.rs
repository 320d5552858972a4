//! Visit and visit photo models.

use junrei_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visit {
    pub id: DbId,
    pub user_id: DbId,
    pub place_id: DbId,
    pub visited_at: Option<Timestamp>,
    pub note: Option<String>,
    pub photos_count: i32,
    pub created_at: Timestamp,
}

/// DTO for recording a visit. The user comes from the session.
#[derive(Debug, Deserialize)]
pub struct CreateVisit {
    pub place_id: DbId,
    pub visited_at: Option<Timestamp>,
    pub note: Option<String>,
}

/// The caller's own visit history for one place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisitSummary {
    pub id: DbId,
    pub visited_at: Option<Timestamp>,
    pub note: Option<String>,
    pub photos_count: i32,
}

/// A row from the `visit_photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisitPhoto {
    pub id: DbId,
    pub visit_id: DbId,
    pub path: String,
    pub storage_bucket: String,
    pub mime_type: Option<String>,
    pub created_at: Timestamp,
}
