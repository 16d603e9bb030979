use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_OLLAMA_BASE_URL: &str = "http://127.0.0.1:11434";
const DEFAULT_MODEL: &str = "deepseek-r1:1.5b";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let ollama_base_url = env::var("OLLAMA_BASE_URL")
        .or_else(|_| env::var("OLLAMA_HOST"))
        .unwrap_or_else(|_| DEFAULT_OLLAMA_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let disable_proxy = parse_bool_env("DISABLE_PROXY", false);

    Ok(AppConfig {
        port,
        ollama_base_url,
        model,
        disable_proxy,
    })
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}
