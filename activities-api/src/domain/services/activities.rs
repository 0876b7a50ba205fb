use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;

use crate::domain::{
    models::{ActivityRoster, RosterChange},
    ports::{
        inbound::ActivityService,
        outbound::{ActivitySession, ActivityStore, SessionMode},
    },
    ActivityError,
};

pub struct ActivityServiceImpl<S> {
    store: Arc<S>,
}

impl<S> ActivityServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ActivityStore> ActivityService for ActivityServiceImpl<S> {
    async fn list_activities(&self) -> Result<BTreeMap<String, ActivityRoster>, ActivityError> {
        let mut session = self.store.open_session(SessionMode::ReadOnly).await?;

        let mut rosters = BTreeMap::new();
        for activity in session.list_activities().await? {
            let participations = session.participations_for_activity(activity.id).await?;

            let mut participants = Vec::with_capacity(participations.len());
            for participation in participations {
                match session.get_student(participation.student_id).await? {
                    Some(student) => participants.push(student.email),
                    None => tracing::warn!(
                        "participation {} references missing student {}, skipping",
                        participation.id,
                        participation.student_id
                    ),
                }
            }

            rosters.insert(
                activity.name.clone(),
                ActivityRoster::new(activity, participants),
            );
        }

        Ok(rosters)
    }

    async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<RosterChange, ActivityError> {
        let mut session = self.store.open_session(SessionMode::ReadWrite).await?;

        let activity = session
            .find_activity_by_name(activity_name)
            .await?
            .ok_or_else(|| ActivityError::ActivityNotFound(activity_name.to_owned()))?;

        let student = match session.find_student_by_email(email).await? {
            Some(student) => student,
            None => {
                tracing::debug!("creating student {}", email);
                session.insert_student(email).await?
            }
        };

        if session
            .find_participation(activity.id, student.id)
            .await?
            .is_some()
        {
            return Err(ActivityError::AlreadySignedUp);
        }

        let enrolled = session.count_participations(activity.id).await?;
        if !activity.has_room_for_another(enrolled) {
            return Err(ActivityError::CapacityExceeded);
        }

        session.insert_participation(activity.id, student.id).await?;
        session.commit().await?;

        tracing::info!("signed up {} for {}", email, activity_name);
        Ok(RosterChange::SignedUp {
            email: email.to_owned(),
            activity_name: activity_name.to_owned(),
        })
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<RosterChange, ActivityError> {
        let mut session = self.store.open_session(SessionMode::ReadWrite).await?;

        let activity = session
            .find_activity_by_name(activity_name)
            .await?
            .ok_or_else(|| ActivityError::ActivityNotFound(activity_name.to_owned()))?;

        let student = session
            .find_student_by_email(email)
            .await?
            .ok_or(ActivityError::NotSignedUp)?;

        let participation = session
            .find_participation(activity.id, student.id)
            .await?
            .ok_or(ActivityError::NotSignedUp)?;

        session.delete_participation(participation.id).await?;
        session.commit().await?;

        tracing::info!("unregistered {} from {}", email, activity_name);
        Ok(RosterChange::Unregistered {
            email: email.to_owned(),
            activity_name: activity_name.to_owned(),
        })
    }
}
