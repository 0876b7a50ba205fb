use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};

use crate::domain::{
    models::{Activity, ActivityId, Participation, ParticipationId, Student, StudentId},
    ports::outbound::ActivitySession,
    ActivityError,
};

#[derive(sqlx::FromRow)]
struct ActivityRow {
    id: i64,
    name: String,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: i64,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    email: String,
    name: Option<String>,
    grade: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id.into(),
            email: row.email,
            name: row.name,
            grade: row.grade,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ParticipationRow {
    id: i64,
    activity_id: i64,
    student_id: i64,
}

impl From<ParticipationRow> for Participation {
    fn from(row: ParticipationRow) -> Self {
        Self {
            id: row.id.into(),
            activity_id: row.activity_id.into(),
            student_id: row.student_id.into(),
        }
    }
}

pub struct SqliteSession {
    transaction: Transaction<'static, Sqlite>,
}

impl SqliteSession {
    pub(super) fn new(transaction: Transaction<'static, Sqlite>) -> Self {
        Self { transaction }
    }
}

#[async_trait]
impl ActivitySession for SqliteSession {
    async fn find_activity_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<Activity>, ActivityError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, name, description, schedule, max_participants
            FROM activities
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(row.map(Activity::from))
    }

    async fn list_activities(&mut self) -> Result<Vec<Activity>, ActivityError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, name, description, schedule, max_participants
            FROM activities
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn find_student_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<Student>, ActivityError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, email, name, grade
            FROM students
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(row.map(Student::from))
    }

    async fn get_student(&mut self, id: StudentId) -> Result<Option<Student>, ActivityError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, email, name, grade
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(row.map(Student::from))
    }

    async fn insert_student(&mut self, email: &str) -> Result<Student, ActivityError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (email)
            VALUES (?)
            RETURNING id, email, name, grade
            "#,
        )
        .bind(email)
        .fetch_one(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(row.into())
    }

    async fn find_participation(
        &mut self,
        activity_id: ActivityId,
        student_id: StudentId,
    ) -> Result<Option<Participation>, ActivityError> {
        let row = sqlx::query_as::<_, ParticipationRow>(
            r#"
            SELECT id, activity_id, student_id
            FROM participations
            WHERE activity_id = ? AND student_id = ?
            "#,
        )
        .bind(activity_id.as_i64())
        .bind(student_id.as_i64())
        .fetch_optional(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(row.map(Participation::from))
    }

    async fn participations_for_activity(
        &mut self,
        activity_id: ActivityId,
    ) -> Result<Vec<Participation>, ActivityError> {
        let rows = sqlx::query_as::<_, ParticipationRow>(
            r#"
            SELECT id, activity_id, student_id
            FROM participations
            WHERE activity_id = ?
            ORDER BY id
            "#,
        )
        .bind(activity_id.as_i64())
        .fetch_all(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(rows.into_iter().map(Participation::from).collect())
    }

    async fn count_participations(
        &mut self,
        activity_id: ActivityId,
    ) -> Result<i64, ActivityError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM participations
            WHERE activity_id = ?
            "#,
        )
        .bind(activity_id.as_i64())
        .fetch_one(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)
    }

    async fn insert_participation(
        &mut self,
        activity_id: ActivityId,
        student_id: StudentId,
    ) -> Result<Participation, ActivityError> {
        let row = sqlx::query_as::<_, ParticipationRow>(
            r#"
            INSERT INTO participations (activity_id, student_id)
            VALUES (?, ?)
            RETURNING id, activity_id, student_id
            "#,
        )
        .bind(activity_id.as_i64())
        .bind(student_id.as_i64())
        .fetch_one(&mut *self.transaction)
        .await
        .map_err(|err| {
            let is_duplicate = err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if is_duplicate {
                ActivityError::AlreadySignedUp
            } else {
                ActivityError::storage(err)
            }
        })?;

        Ok(row.into())
    }

    async fn delete_participation(&mut self, id: ParticipationId) -> Result<(), ActivityError> {
        sqlx::query(
            r#"
            DELETE FROM participations
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .execute(&mut *self.transaction)
        .await
        .map_err(ActivityError::storage)?;

        Ok(())
    }

    async fn commit(self) -> Result<(), ActivityError> {
        self.transaction
            .commit()
            .await
            .map_err(ActivityError::storage)
    }
}
