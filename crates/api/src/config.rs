use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Default CORS allow-list (local frontend dev servers).
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000,http://127.0.0.1:5173";

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT` (default `pretty`).
    pub fn from_env() -> Self {
        Self::parse(&env_or("LOG_FORMAT", "pretty"))
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Settings for the package-id lookup service.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Whether auto-resolution is attempted at all.
    pub enabled: bool,
    /// winget.run base URL.
    pub base_url: String,
    /// Upper bound on a single lookup.
    pub timeout: Duration,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Package-id lookup settings.
    pub resolver: ResolverConfig,
    pub log_format: LogFormat,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `8080`                     |
    /// | `CORS_ORIGINS`          | local dev servers          |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `DATABASE_URL`          | unset (in-memory store)    |
    /// | `WINGET_API_URL`        | `https://api.winget.run`   |
    /// | `RESOLVER_TIMEOUT_SECS` | `8`                        |
    /// | `RESOLVER_ENABLED`      | `true`                     |
    /// | `LOG_FORMAT`            | `pretty`                   |
    ///
    /// # Panics
    ///
    /// Panics on unparsable numeric values and when `JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "8080")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let resolver_timeout_secs: u64 = env_or("RESOLVER_TIMEOUT_SECS", "8")
            .parse()
            .expect("RESOLVER_TIMEOUT_SECS must be a valid u64");

        let resolver = ResolverConfig {
            enabled: !matches!(
                env_or("RESOLVER_ENABLED", "true").trim().to_ascii_lowercase().as_str(),
                "false" | "0" | "no" | "off"
            ),
            base_url: env_or("WINGET_API_URL", setupforme_winget::api::DEFAULT_BASE_URL),
            timeout: Duration::from_secs(resolver_timeout_secs),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            jwt: JwtConfig::from_env(),
            resolver,
            log_format: LogFormat::from_env(),
        }
    }
}
