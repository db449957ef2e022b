use crate::app_config::{AppConfig, BuildIdStrategy, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::{IpAddr, SocketAddr};

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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("PFS_ENV", "production"));

    let host = or_default("PFS_BIND_HOST", "0.0.0.0")
        .parse::<IpAddr>()
        .map_err(|e| invalid("PFS_BIND_HOST", e.to_string()))?;
    let port = or_default("PORT", "5000")
        .parse::<u16>()
        .map_err(|e| invalid("PORT", e.to_string()))?;
    let bind_addr = SocketAddr::new(host, port);

    let default_level = if env == Environment::Development {
        "debug"
    } else {
        "info"
    };
    let log_level = or_default("PFS_LOG_LEVEL", default_level);

    let upstream_base_url = or_default("PFS_UPSTREAM_BASE_URL", "https://www.propertyfinder.ae")
        .trim_end_matches('/')
        .to_string();
    if !(upstream_base_url.starts_with("http://") || upstream_base_url.starts_with("https://")) {
        return Err(invalid(
            "PFS_UPSTREAM_BASE_URL",
            format!("\"{upstream_base_url}\" is not an http(s) URL"),
        ));
    }

    let request_timeout_secs = parse_u64("PFS_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "PFS_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }

    let page_delay_ms = parse_u64("PFS_PAGE_DELAY_MS", "300")?;

    let max_pages = parse_u32("PFS_MAX_PAGES", "4")?;
    if max_pages == 0 {
        return Err(invalid("PFS_MAX_PAGES", "must be at least 1".to_string()));
    }

    let build_id = match lookup("PFS_BUILD_ID") {
        Ok(token) if !token.trim().is_empty() => BuildIdStrategy::Static(token.trim().to_string()),
        _ => BuildIdStrategy::Scrape,
    };

    let refresh_build_id = parse_bool(&or_default("PFS_BUILD_ID_REFRESH", "true"))
        .ok_or_else(|| invalid("PFS_BUILD_ID_REFRESH", "expected true or false".to_string()))?;

    let rate_limit_per_minute = parse_usize("PFS_RATE_LIMIT_PER_MINUTE", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        upstream_base_url,
        request_timeout_secs,
        page_delay_ms,
        max_pages,
        build_id,
        refresh_build_id,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Production`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "development" => Environment::Development,
        "test" => Environment::Test,
        _ => Environment::Production,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
