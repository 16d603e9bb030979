use std::sync::Arc;

use crate::features::referral::ReferralService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReferralService>,
}

impl AppState {
    pub fn new(service: Arc<ReferralService>) -> Self {
        Self { service }
    }
}
