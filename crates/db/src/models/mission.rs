//! Mission catalog rows.

use junrei_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// The public view of a `missions` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub color: Option<String>,
}

/// A `mission_places` membership pair.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct MissionPlace {
    pub mission_id: DbId,
    pub place_id: DbId,
}
