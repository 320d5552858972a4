use std::net::SocketAddr;
use std::sync::Arc;

use junrei_api::config::ServerConfig;
use junrei_api::router::build_app_router;
use junrei_api::state::AppState;
use junrei_core::certificate::CertificateRenderer;
use junrei_storage::S3Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "junrei_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = junrei_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    junrei_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    junrei_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Object storage ---
    let storage = S3Storage::connect(config.s3_endpoint.as_deref()).await;
    tracing::info!("Object storage client created");

    // --- Certificate renderer ---
    let certificates = load_certificate_renderer(&config);
    tracing::info!(bitmap_font = certificates.is_bitmap(), "Certificate renderer ready");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(storage),
        certificates: Arc::new(certificates),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Load the configured certificate font, falling back to the bitmap font.
fn load_certificate_renderer(config: &ServerConfig) -> CertificateRenderer {
    let Some(path) = &config.certificate.font_path else {
        tracing::info!("CERTIFICATE_FONT_PATH not set, certificates use the bitmap font");
        return CertificateRenderer::bitmap();
    };

    match CertificateRenderer::with_font_file(path) {
        Ok(renderer) => {
            tracing::info!(path = %path.display(), "Loaded certificate font");
            renderer
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Certificate font unavailable, using bitmap font");
            CertificateRenderer::bitmap()
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
