use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralResponse {
    pub referral: String,
}
