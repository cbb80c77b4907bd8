use crate::app_config::DiscoveryConfig;
use crate::ConfigError;

/// Load discovery configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_discovery_config() -> Result<DiscoveryConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_discovery_config_from_env()
}

/// Load discovery configuration from environment variables already in the
/// process.
///
/// Unlike [`load_discovery_config`], this does NOT load `.env` files —
/// useful for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_discovery_config_from_env() -> Result<DiscoveryConfig, ConfigError> {
    build_discovery_config(|key| std::env::var(key))
}

/// Build discovery configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_discovery_config<F>(lookup: F) -> Result<DiscoveryConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let endpoints_raw = or_default(
        "MOODBITE_OVERPASS_ENDPOINTS",
        "https://overpass-api.de/api/interpreter,\
         https://overpass.kumi.systems/api/interpreter,\
         https://maps.mail.ru/osm/tools/overpass/api/interpreter",
    );
    let overpass_endpoints: Vec<String> = endpoints_raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if overpass_endpoints.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOODBITE_OVERPASS_ENDPOINTS".to_string(),
            reason: "endpoint list is empty".to_string(),
        });
    }

    let overpass_max_attempts = parse_u32("MOODBITE_OVERPASS_MAX_ATTEMPTS", "3")?;
    if overpass_max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOODBITE_OVERPASS_MAX_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let overpass_request_timeout_secs = parse_u64("MOODBITE_OVERPASS_REQUEST_TIMEOUT_SECS", "15")?;
    let overpass_initial_backoff_ms = parse_u64("MOODBITE_OVERPASS_INITIAL_BACKOFF_MS", "500")?;

    let geocode_base_url = or_default(
        "MOODBITE_GEOCODE_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let geocode_timeout_secs = parse_u64("MOODBITE_GEOCODE_TIMEOUT_SECS", "10")?;

    let device_timeout_secs = parse_u64("MOODBITE_DEVICE_TIMEOUT_SECS", "10")?;
    let device_max_age_secs = parse_u64("MOODBITE_DEVICE_MAX_AGE_SECS", "300")?;

    let user_agent = or_default("MOODBITE_USER_AGENT", "moodbite/0.1 (food-discovery)");
    let log_level = or_default("MOODBITE_LOG_LEVEL", "info");

    Ok(DiscoveryConfig {
        overpass_endpoints,
        overpass_max_attempts,
        overpass_request_timeout_secs,
        overpass_initial_backoff_ms,
        geocode_base_url,
        geocode_timeout_secs,
        device_timeout_secs,
        device_max_age_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
