//! Issued certificate models.

use junrei_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::mission::Mission;

/// A row from the `certificates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certificate {
    pub id: DbId,
    pub user_id: DbId,
    pub mission_id: DbId,
    pub image_path: String,
    pub created_at: Timestamp,
}

/// A certificate joined with its mission, for the owner's listing.
#[derive(Debug, Clone, FromRow)]
pub struct CertificateWithMission {
    pub id: DbId,
    pub image_path: String,
    pub created_at: Timestamp,
    pub mission_id: DbId,
    pub mission_slug: String,
    pub mission_title: String,
    pub mission_color: Option<String>,
}

impl CertificateWithMission {
    /// The joined mission as its public view.
    pub fn mission(&self) -> Mission {
        Mission {
            id: self.mission_id,
            slug: self.mission_slug.clone(),
            title: self.mission_title.clone(),
            color: self.mission_color.clone(),
        }
    }
}
