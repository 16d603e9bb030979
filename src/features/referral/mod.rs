pub mod dto;
pub mod handler;
pub mod helpers;
pub mod service;

pub use dto::{ReferralResponse, SymptomRequest};
pub use handler::{handle_healthcheck, handle_predict};
pub use service::{EMPTY_DESCRIPTION_DETAIL, ReferralService};
