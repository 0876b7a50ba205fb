use std::sync::Arc;

use crate::domain::ports::inbound::ActivityService;

#[derive(Clone)]
pub struct AppState {
    pub activity_service: Arc<dyn ActivityService>,
}

impl AppState {
    pub fn new(activity_service: Arc<dyn ActivityService>) -> Self {
        Self { activity_service }
    }
}
