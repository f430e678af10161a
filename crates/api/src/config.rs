use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Signup count a city needs to unlock its premiere (default: `100`).
    pub premiere_threshold: u32,
    /// Base URL of the external postal-code lookup.
    pub geocode_base_url: String,
    /// Upper bound on a single postal-code lookup, in seconds (default: `5`).
    pub geocode_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `PREMIERE_THRESHOLD`   | `100`                        |
    /// | `GEOCODE_BASE_URL`     | `https://api.zippopotam.us`  |
    /// | `GEOCODE_TIMEOUT_SECS` | `5`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let premiere_threshold: u32 = std::env::var("PREMIERE_THRESHOLD")
            .unwrap_or_else(|_| premiere_core::leaderboard::DEFAULT_THRESHOLD.to_string())
            .parse()
            .expect("PREMIERE_THRESHOLD must be a valid u32");

        let geocode_base_url = std::env::var("GEOCODE_BASE_URL")
            .unwrap_or_else(|_| "https://api.zippopotam.us".into());

        let geocode_timeout_secs: u64 = std::env::var("GEOCODE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("GEOCODE_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            premiere_threshold,
            geocode_base_url,
            geocode_timeout_secs,
        }
    }

    /// Bound on a single postal-code lookup as a [`Duration`].
    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.geocode_timeout_secs)
    }
}
