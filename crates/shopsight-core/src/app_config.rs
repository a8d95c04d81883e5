use std::net::SocketAddr;

/// Runtime configuration, sourced from `SHOPSIGHT_*` environment variables.
///
/// Every field has a default, so the service runs with no environment setup
/// at all. See [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Per-request timeout applied to every outbound fetch of a scrape.
    pub scraper_timeout_secs: u64,
    /// User-Agent presented on every outbound fetch.
    pub scraper_user_agent: String,
}
