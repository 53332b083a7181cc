use crate::widget_config::{WidgetConfig, ALL_PRODUCTS_HANDLE};
use crate::ConfigError;

/// Load widget configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_widget_config() -> Result<WidgetConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_widget_config_from_env()
}

/// Load widget configuration from environment variables already in the process.
///
/// Unlike [`load_widget_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_widget_config_from_env() -> Result<WidgetConfig, ConfigError> {
    build_widget_config(|key| std::env::var(key))
}

/// Build widget configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] when a required variable is absent
/// and [`ConfigError::InvalidEnvVar`] when a numeric variable fails to parse.
pub fn build_widget_config<F>(lookup: F) -> Result<WidgetConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let shop_domain = require("SHOPFRONT_SHOP_DOMAIN")?;
    let storefront_token = require("SHOPFRONT_STOREFRONT_TOKEN")?;

    let collection_handle = or_default("SHOPFRONT_COLLECTION_HANDLE", ALL_PRODUCTS_HANDLE);
    let api_version = or_default("SHOPFRONT_API_VERSION", "2024-01");
    let page_size = parse_u32("SHOPFRONT_PAGE_SIZE", "12")?;
    let request_timeout_secs = parse_u64("SHOPFRONT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPFRONT_USER_AGENT", "shopfront/0.1 (collection-widget)");
    let log_level = or_default("SHOPFRONT_LOG_LEVEL", "info");

    Ok(WidgetConfig {
        shop_domain,
        storefront_token,
        collection_handle,
        api_version,
        page_size,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
