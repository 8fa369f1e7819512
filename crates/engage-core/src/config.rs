use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a plain `HashMap` lookup.
///
/// The original dashboard fell back to a hardcoded JWT when no auth cookie
/// was present; that is a credential-hygiene defect and is not reproduced
/// here — a missing `ENGAGE_AUTH_TOKEN` is a hard error.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = require("ENGAGE_API_URL")?;
    let auth_token = require("ENGAGE_AUTH_TOKEN")?;
    let log_level = or_default("ENGAGE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("ENGAGE_REQUEST_TIMEOUT_SECS", "30")?;
    let page_size = parse_u32("ENGAGE_PAGE_SIZE", "100")?;

    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ENGAGE_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        api_url,
        auth_token,
        log_level,
        request_timeout_secs,
        page_size,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("ENGAGE_API_URL", "https://api.example.com");
        m.insert("ENGAGE_AUTH_TOKEN", "test-token");
        m
    }

    #[test]
    fn fails_without_api_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "ENGAGE_API_URL"),
            "expected MissingEnvVar(ENGAGE_API_URL), got: {result:?}"
        );
    }

    #[test]
    fn fails_without_auth_token() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("ENGAGE_API_URL", "https://api.example.com");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "ENGAGE_AUTH_TOKEN"),
            "expected MissingEnvVar(ENGAGE_AUTH_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_defaults() {
        let map = full_env();
        let config = build_config(lookup_from_map(&map)).expect("valid config");
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn timeout_override() {
        let mut map = full_env();
        map.insert("ENGAGE_REQUEST_TIMEOUT_SECS", "60");
        let config = build_config(lookup_from_map(&map)).expect("valid config");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = full_env();
        map.insert("ENGAGE_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENGAGE_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(ENGAGE_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut map = full_env();
        map.insert("ENGAGE_PAGE_SIZE", "0");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENGAGE_PAGE_SIZE"),
            "expected InvalidEnvVar(ENGAGE_PAGE_SIZE), got: {result:?}"
        );
    }
}
