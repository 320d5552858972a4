//! Request extractors shared by handlers.

use axum::extract::FromRequest;
use junrei_core::error::CoreError;
use junrei_core::types::DbId;

use crate::error::AppError;

/// `axum::Json` with rejections mapped to the API's JSON error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Parse a path id. A malformed id is reported as "not found" so callers
/// cannot tell it apart from a missing or foreign row.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, AppError> {
    DbId::parse_str(raw).map_err(|_| AppError::Core(CoreError::not_found(entity, raw)))
}

/// Run field checks on an accepted body. A failure gets the same generic
/// 400 as an unparseable body; the detail only reaches the debug log.
pub fn check_body(checks: impl FnOnce() -> Result<(), CoreError>) -> Result<(), AppError> {
    checks().map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::invalid_body()
    })
}
