use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::ollama::dto::{ChatMessage, ChatRequest, ChatResponse};

/// Seam between the request handler and the inference backend. Implementors
/// encapsulate transport and vendor wire details; tests substitute a mock.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a single user-role prompt and return the completion's text content.
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

pub struct OllamaClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.ollama_base_url)
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        };

        let response = self
            .http_client
            .post(self.chat_url())
            .json(&request)
            .send()
            .await
            .map_err(|err| AppError::model_unavailable(format!("chat request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::model_unavailable(format!(
                "chat request returned {status}: {body}"
            )));
        }

        let payload = response.json::<ChatResponse>().await.map_err(|err| {
            AppError::model_unavailable(format!("failed to decode chat response: {err}"))
        })?;

        Ok(payload.message.content)
    }
}
