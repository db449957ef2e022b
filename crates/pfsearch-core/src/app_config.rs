use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the upstream build identifier is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildIdStrategy {
    /// Use a previously observed token; no extra request per search.
    Static(String),
    /// Scrape the token from the upstream search page on demand.
    Scrape,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub upstream_base_url: String,
    pub request_timeout_secs: u64,
    pub page_delay_ms: u64,
    pub max_pages: u32,
    pub build_id: BuildIdStrategy,
    /// Re-resolve the build id before the final page-1 fetch.
    pub refresh_build_id: bool,
    pub rate_limit_per_minute: usize,
}

impl AppConfig {
    /// `true` when running in development mode (verbose logging, permissive
    /// defaults).
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.env == Environment::Development
    }
}
