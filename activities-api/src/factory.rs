//! Composition root — wires concrete outbound adapters into services.
//!
//! This is the ONLY place that names the concrete store behind the service.

use std::sync::Arc;

use crate::{
    adapters::outbound::sqlite::SqliteActivityStore,
    app_state::AppState,
    domain::{ports::inbound::ActivityService, services::ActivityServiceImpl},
};

pub fn activity_service(store: Arc<SqliteActivityStore>) -> Arc<dyn ActivityService> {
    Arc::new(ActivityServiceImpl::new(store))
}

pub fn app_state(store: Arc<SqliteActivityStore>) -> AppState {
    AppState::new(activity_service(store))
}
