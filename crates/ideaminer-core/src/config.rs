use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("IDEAMINER_ENV", "development"));

    let bind_addr = parse_addr("IDEAMINER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("IDEAMINER_LOG_LEVEL", "info");

    let reddit_base_url = or_default("IDEAMINER_REDDIT_BASE_URL", "https://www.reddit.com");
    let user_agent = or_default("IDEAMINER_USER_AGENT", "ideaminer/0.1 (pain-point-mining)");
    let request_timeout_secs = parse_u64("IDEAMINER_REQUEST_TIMEOUT_SECS", "30")?;

    let analyzer_api_key = lookup("DEEPSEEK_API_KEY").ok();
    let analyzer_base_url = or_default("IDEAMINER_ANALYZER_BASE_URL", "https://api.deepseek.com");
    let analyzer_model = or_default("IDEAMINER_ANALYZER_MODEL", "deepseek-chat");
    // Biased toward creative variation on the backend's nominal 0-2 scale.
    let analyzer_temperature = parse_f32("IDEAMINER_ANALYZER_TEMPERATURE", "1.3")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        reddit_base_url,
        user_agent,
        request_timeout_secs,
        analyzer_api_key,
        analyzer_base_url,
        analyzer_model,
        analyzer_temperature,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
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

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_applies_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.reddit_base_url, "https://www.reddit.com");
        assert_eq!(cfg.analyzer_base_url, "https://api.deepseek.com");
        assert_eq!(cfg.analyzer_model, "deepseek-chat");
        assert!((cfg.analyzer_temperature - 1.3).abs() < f32::EPSILON);
        assert!(cfg.analyzer_api_key.is_none());
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("IDEAMINER_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "IDEAMINER_BIND_ADDR"),
            "expected InvalidEnvVar(IDEAMINER_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_temperature() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("IDEAMINER_ANALYZER_TEMPERATURE", "warm");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "IDEAMINER_ANALYZER_TEMPERATURE"),
            "expected InvalidEnvVar(IDEAMINER_ANALYZER_TEMPERATURE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_picks_up_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("IDEAMINER_ENV", "production");
        map.insert("IDEAMINER_REDDIT_BASE_URL", "http://localhost:8080");
        map.insert("DEEPSEEK_API_KEY", "sk-test");
        let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should parse");
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.reddit_base_url, "http://localhost:8080");
        assert_eq!(cfg.analyzer_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("DEEPSEEK_API_KEY", "sk-secret");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should parse");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sk-secret"), "api key leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
