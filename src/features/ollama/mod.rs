pub mod client;
pub mod dto;

pub use client::{ChatBackend, OllamaClient};
pub use dto::{ChatMessage, ChatRequest, ChatResponse};
