use std::sync::Arc;

use junrei_core::certificate::CertificateRenderer;
use junrei_core::storage::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: junrei_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage for visit photos and certificates.
    pub storage: Arc<dyn ObjectStorage>,
    /// Certificate renderer, built once with whatever font could be loaded.
    pub certificates: Arc<CertificateRenderer>,
}
