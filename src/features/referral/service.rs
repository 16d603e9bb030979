use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::error::AppError;
use crate::features::ollama::ChatBackend;
use crate::features::referral::dto::{ReferralResponse, SymptomRequest};
use crate::features::referral::helpers::strip_thinking;

pub const EMPTY_DESCRIPTION_DETAIL: &str = "Please describe your symptoms";

pub struct ReferralService {
    backend: Arc<dyn ChatBackend>,
}

impl ReferralService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    pub async fn predict(&self, request: SymptomRequest) -> Result<ReferralResponse, AppError> {
        info!(description = %request.description, "received symptom description");

        let description = request.description.trim();
        if description.is_empty() {
            warn!("empty symptom description received");
            return Err(AppError::invalid_input(EMPTY_DESCRIPTION_DETAIL));
        }

        // The prompt is exactly the normalized user text. The upstream system
        // intended to constrain it to medical topics but never did; that gap
        // is preserved here rather than silently fixed (see DESIGN.md).
        let prompt = description.to_lowercase();
        debug!(%prompt, "sending prompt to model");

        let content = self.backend.complete(&prompt).await?;
        let referral = strip_thinking(&content);
        info!(%referral, "model response received");

        Ok(ReferralResponse { referral })
    }
}
