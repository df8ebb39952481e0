use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, LatLng, RegionConfig};

const DEFAULT_GOOGLE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        parse_value(var, &or_default(var, default))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        parse_value(var, &or_default(var, default))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        parse_value(var, &or_default(var, default))
    };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_value(var, &raw),
            Err(_) => Ok(default),
        }
    };

    let google_api_key = require("GOOGLE_API_KEY")?;

    let env = parse_environment(&or_default("FCTBIZ_ENV", "development"))?;

    let bind_addr = parse("FCTBIZ_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("FCTBIZ_LOG_LEVEL", "info");
    let google_base_url = or_default("FCTBIZ_GOOGLE_BASE_URL", DEFAULT_GOOGLE_BASE_URL);
    let request_timeout_secs = parse_u64("FCTBIZ_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FCTBIZ_USER_AGENT", "fctbiz/0.1 (business-search)");

    let defaults = RegionConfig::default();
    let center = LatLng::new(
        parse_f64("FCTBIZ_CENTER_LAT", defaults.center.lat)?,
        parse_f64("FCTBIZ_CENTER_LNG", defaults.center.lng)?,
    );
    let radius_meters = parse_u32(
        "FCTBIZ_RADIUS_METERS",
        &defaults.radius_meters.to_string(),
    )?;
    if radius_meters == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FCTBIZ_RADIUS_METERS".to_string(),
            reason: "radius must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        google_api_key,
        google_base_url,
        request_timeout_secs,
        user_agent,
        region: RegionConfig {
            center,
            radius_meters,
            ..defaults
        },
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FCTBIZ_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
