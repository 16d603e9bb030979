pub mod ollama;
pub mod referral;
