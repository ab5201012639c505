//! Centralized configuration (environment variables + defaults).

/// MongoDB connection string.
///
/// Optional by design: when unset, the service starts anyway and the
/// persistence gateway reports itself unavailable on first use.
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty())
}

/// Target database name. Optional, same policy as [`database_url`].
pub fn database_name() -> Option<String> {
    std::env::var("DATABASE_NAME").ok().filter(|v| !v.is_empty())
}

/// HTTP listen port (defaults to 8000).
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8000)
}
