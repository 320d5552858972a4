//! Place rows.

use junrei_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `places` table.
///
/// `prefecture` and `address` are omitted from JSON when unset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A place joined with one of the missions it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct PlaceMissionRow {
    #[sqlx(flatten)]
    pub place: Place,
    pub mission_slug: String,
}
