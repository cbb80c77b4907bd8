/// Runtime configuration for the discovery pipeline.
///
/// Every field has a default matching the reference deployment, so an empty
/// environment yields a working config. The retry/backoff/timeout knobs
/// exist so tests can run with fake endpoints and near-zero delays.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Interchangeable Overpass-style endpoints, cycled round-robin across
    /// retries.
    pub overpass_endpoints: Vec<String>,
    /// Total attempts per fetch, across the endpoint pool. At least 1.
    pub overpass_max_attempts: u32,
    /// Hard per-attempt timeout.
    pub overpass_request_timeout_secs: u64,
    /// Base delay for exponential backoff between non-timeout failures.
    pub overpass_initial_backoff_ms: u64,
    pub geocode_base_url: String,
    pub geocode_timeout_secs: u64,
    /// How long to wait for the hosting environment's position fix.
    pub device_timeout_secs: u64,
    /// Maximum acceptable age of a cached position fix.
    pub device_max_age_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
