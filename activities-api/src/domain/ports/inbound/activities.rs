use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{
    models::{ActivityRoster, RosterChange},
    ActivityError,
};

/// Roster operations exposed to the HTTP layer.
///
/// Every call runs inside exactly one store session; a failed call leaves the
/// store untouched.
#[async_trait]
pub trait ActivityService: Send + Sync + 'static {
    /// All activities keyed by name, each with its participants in signup order.
    async fn list_activities(&self) -> Result<BTreeMap<String, ActivityRoster>, ActivityError>;

    /// Sign a student up for an activity, creating the student on first sight.
    async fn signup(&self, activity_name: &str, email: &str)
        -> Result<RosterChange, ActivityError>;

    /// Remove a student from an activity's roster.
    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<RosterChange, ActivityError>;
}
