//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::SubscriptionService;
use crate::domain::click_tracker::ClickTracker;

/// Application state. Cheap to clone; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub subscription_service: Arc<SubscriptionService>,
    pub click_tracker: ClickTracker,
}

impl AppState {
    pub fn new(subscription_service: Arc<SubscriptionService>, click_tracker: ClickTracker) -> Self {
        Self {
            subscription_service,
            click_tracker,
        }
    }
}
