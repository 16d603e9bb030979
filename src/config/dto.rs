use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub ollama_base_url: String,
    pub model: String,
    pub disable_proxy: bool,
}
