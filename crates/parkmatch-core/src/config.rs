use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default; only malformed or out-of-range values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("PARKMATCH_LOG_LEVEL", "info");
    let queue_times_url = or_default(
        "PARKMATCH_QUEUE_TIMES_URL",
        "https://queue-times.com/parks.json",
    );
    let theme_parks_url = or_default(
        "PARKMATCH_THEME_PARKS_URL",
        "https://free.alexjuillard.fr:8000/api/theme-parks",
    );
    let search_url = or_default(
        "PARKMATCH_SEARCH_URL",
        "https://free.alexjuillard.fr:8000/api/theme-parks/search",
    );
    let image_base_url = or_default("PARKMATCH_IMAGE_BASE_URL", "https://rcdb.com");
    let image_cache_dir = PathBuf::from(or_default(
        "PARKMATCH_IMAGE_CACHE_DIR",
        "./cache/park-images",
    ));
    let request_timeout_secs = parse_u64("PARKMATCH_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("PARKMATCH_USER_AGENT", "parkmatch/0.1 (park-imagery)");

    let image_dimension = or_default("PARKMATCH_IMAGE_DIMENSION", "150")
        .parse::<u32>()
        .map_err(|e| invalid("PARKMATCH_IMAGE_DIMENSION", e.to_string()))?;
    if image_dimension == 0 {
        return Err(invalid(
            "PARKMATCH_IMAGE_DIMENSION",
            "must be greater than zero".to_string(),
        ));
    }

    let image_quality = or_default("PARKMATCH_IMAGE_QUALITY", "75")
        .parse::<u8>()
        .map_err(|e| invalid("PARKMATCH_IMAGE_QUALITY", e.to_string()))?;
    if !(1..=100).contains(&image_quality) {
        return Err(invalid(
            "PARKMATCH_IMAGE_QUALITY",
            format!("{image_quality} is outside 1..=100"),
        ));
    }

    let image_limit = or_default("PARKMATCH_IMAGE_LIMIT", "4")
        .parse::<usize>()
        .map_err(|e| invalid("PARKMATCH_IMAGE_LIMIT", e.to_string()))?;
    if image_limit == 0 {
        return Err(invalid(
            "PARKMATCH_IMAGE_LIMIT",
            "must be greater than zero".to_string(),
        ));
    }

    let cluster_radius_meters = parse_f64("PARKMATCH_CLUSTER_RADIUS_METERS", "1000")?;
    if !cluster_radius_meters.is_finite() || cluster_radius_meters <= 0.0 {
        return Err(invalid(
            "PARKMATCH_CLUSTER_RADIUS_METERS",
            format!("{cluster_radius_meters} is not a positive distance"),
        ));
    }

    let match_threshold = parse_f64("PARKMATCH_MATCH_THRESHOLD", "0.45")?;
    if !(0.0..=1.0).contains(&match_threshold) {
        return Err(invalid(
            "PARKMATCH_MATCH_THRESHOLD",
            format!("{match_threshold} is outside [0, 1]"),
        ));
    }

    let location_timeout_secs = parse_u64("PARKMATCH_LOCATION_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        log_level,
        queue_times_url,
        theme_parks_url,
        search_url,
        image_base_url,
        image_cache_dir,
        request_timeout_secs,
        user_agent,
        image_dimension,
        image_quality,
        image_limit,
        cluster_radius_meters,
        match_threshold,
        location_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
