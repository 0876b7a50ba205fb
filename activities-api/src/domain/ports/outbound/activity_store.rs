use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, Participation, ParticipationId, Student, StudentId},
    ActivityError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Takes no write lock; any write attempted through the session fails.
    ReadOnly,
    /// Takes the store's write lock up front, so checks made inside the
    /// session still hold when its writes commit.
    ReadWrite,
}

/// A relational store that hands out transactional sessions.
#[async_trait]
pub trait ActivityStore: Send + Sync + 'static {
    type Session: ActivitySession;

    async fn open_session(&self, mode: SessionMode) -> Result<Self::Session, ActivityError>;
}

/// A unit of work bound to one transaction.
///
/// Nothing is persisted until [`ActivitySession::commit`]; dropping a session
/// without committing rolls it back and releases its connection.
#[async_trait]
pub trait ActivitySession: Send {
    async fn find_activity_by_name(&mut self, name: &str)
        -> Result<Option<Activity>, ActivityError>;

    /// All activities ordered by id.
    async fn list_activities(&mut self) -> Result<Vec<Activity>, ActivityError>;

    async fn find_student_by_email(&mut self, email: &str)
        -> Result<Option<Student>, ActivityError>;

    async fn get_student(&mut self, id: StudentId) -> Result<Option<Student>, ActivityError>;

    /// Insert a student with only the email populated.
    async fn insert_student(&mut self, email: &str) -> Result<Student, ActivityError>;

    async fn find_participation(
        &mut self,
        activity_id: ActivityId,
        student_id: StudentId,
    ) -> Result<Option<Participation>, ActivityError>;

    /// Participations of one activity ordered by id, i.e. signup order.
    async fn participations_for_activity(
        &mut self,
        activity_id: ActivityId,
    ) -> Result<Vec<Participation>, ActivityError>;

    async fn count_participations(&mut self, activity_id: ActivityId)
        -> Result<i64, ActivityError>;

    /// Fails with [`ActivityError::AlreadySignedUp`] if the pair already exists.
    async fn insert_participation(
        &mut self,
        activity_id: ActivityId,
        student_id: StudentId,
    ) -> Result<Participation, ActivityError>;

    async fn delete_participation(&mut self, id: ParticipationId) -> Result<(), ActivityError>;

    async fn commit(self) -> Result<(), ActivityError>;
}
