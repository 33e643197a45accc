use std::env;
use std::net::IpAddr;

use crate::config::dto::{AppConfig, StoreConfig};
use crate::core::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    load_config_from(|key| env::var(key).ok())
}

pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = required(&lookup, "SUPABASE_URL")?;
    let api_key = required(&lookup, "SUPABASE_ANON_KEY")?;

    let host = lookup("HOST")
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
        .parse::<IpAddr>()
        .map_err(|err| AppError::configuration(format!("invalid HOST: {err}")))?;

    let port = lookup("PORT")
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let timeout_secs = lookup("STORE_TIMEOUT_SECS")
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let disable_proxy = lookup("STORE_DISABLE_PROXY")
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(false);

    Ok(AppConfig {
        host,
        port,
        store: StoreConfig {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs,
            disable_proxy,
        },
        static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        index_path: lookup("INDEX_PATH").unwrap_or_else(|| "templates/index.html".to_string()),
    })
}

fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::configuration(format!(
                "{key} is required: missing Supabase credentials in environment variables"
            ))
        })
}
