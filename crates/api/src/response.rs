//! Shared response body types for API handlers.

use junrei_core::types::DbId;
use serde::Serialize;

/// `{ "ok": true }` acknowledgement for mutations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{ "ok": true, "visit_id": ... }` returned after recording a visit.
#[derive(Debug, Serialize)]
pub struct VisitCreated {
    pub ok: bool,
    pub visit_id: DbId,
}

/// `{ "url": ... }` carrying a signed download URL.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub url: String,
}
