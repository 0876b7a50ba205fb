//! HTTP response types for the activity endpoints.
//!
//! These types serialize to the JSON format expected by the front-end.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::{ActivityRoster, RosterChange};

/// Activities keyed by name.
pub type ActivitiesResponse = BTreeMap<String, ActivityResponse>;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ActivityResponse {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i64,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl From<ActivityRoster> for ActivityResponse {
    fn from(roster: ActivityRoster) -> Self {
        Self {
            description: roster.activity.description,
            schedule: roster.activity.schedule,
            max_participants: roster.activity.max_participants,
            participants: roster.participants,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<RosterChange> for MessageResponse {
    fn from(change: RosterChange) -> Self {
        Self {
            message: change.to_string(),
        }
    }
}
