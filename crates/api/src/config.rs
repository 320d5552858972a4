use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Custom S3-compatible endpoint. Unset means AWS S3.
    pub s3_endpoint: Option<String>,
    /// Bearer token validation settings.
    pub jwt: JwtConfig,
    /// Certificate rendering settings.
    pub certificate: CertificateConfig,
}

/// Settings for rendering completion certificates.
#[derive(Debug, Clone)]
pub struct CertificateConfig {
    /// Preferred TrueType/OpenType font. Unset or unreadable means the
    /// built-in bitmap font is used.
    pub font_path: Option<PathBuf>,
    /// UTC offset, in hours, used to print the achievement date (default: `9`).
    pub utc_offset_hours: i32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `HOST`                         | `0.0.0.0`               |
    /// | `PORT`                         | `3000`                  |
    /// | `CORS_ORIGINS`                 | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`         | `30`                    |
    /// | `S3_ENDPOINT`                  | --                      |
    /// | `CERTIFICATE_FONT_PATH`        | --                      |
    /// | `CERTIFICATE_UTC_OFFSET_HOURS` | `9`                     |
    ///
    /// See [`JwtConfig::from_env`] for the JWT variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let s3_endpoint = non_empty_var("S3_ENDPOINT");

        let certificate = CertificateConfig {
            font_path: non_empty_var("CERTIFICATE_FONT_PATH").map(PathBuf::from),
            utc_offset_hours: std::env::var("CERTIFICATE_UTC_OFFSET_HOURS")
                .unwrap_or_else(|_| "9".into())
                .parse()
                .expect("CERTIFICATE_UTC_OFFSET_HOURS must be a valid i32"),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            s3_endpoint,
            jwt,
            certificate,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
