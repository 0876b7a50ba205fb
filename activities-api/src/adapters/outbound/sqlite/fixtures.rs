//! Sample data loaded into an empty database on first start.

use sqlx::SqlitePool;

use super::StoreError;

struct FixtureStudent {
    email: &'static str,
    name: &'static str,
}

struct FixtureActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: i64,
    participants: &'static [&'static str],
}

const STUDENTS: &[FixtureStudent] = &[
    FixtureStudent {
        email: "michael@mergington.edu",
        name: "Michael",
    },
    FixtureStudent {
        email: "daniel@mergington.edu",
        name: "Daniel",
    },
    FixtureStudent {
        email: "emma@mergington.edu",
        name: "Emma",
    },
];

const ACTIVITIES: &[FixtureActivity] = &[
    FixtureActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    FixtureActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu"],
    },
];

/// Load the sample students, activities and rosters unless at least one
/// activity already exists. Returns whether anything was written.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, StoreError> {
    let mut transaction = pool.begin_with("BEGIN IMMEDIATE").await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
        .fetch_one(&mut *transaction)
        .await?;
    if existing > 0 {
        tracing::debug!("{} activities present, skipping fixtures", existing);
        return Ok(false);
    }

    for student in STUDENTS {
        sqlx::query(
            r#"
            INSERT INTO students (email, name)
            VALUES (?, ?)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(student.email)
        .bind(student.name)
        .execute(&mut *transaction)
        .await?;
    }

    for activity in ACTIVITIES {
        let activity_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO activities (name, description, schedule, max_participants)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .fetch_one(&mut *transaction)
        .await?;

        for email in activity.participants {
            sqlx::query(
                r#"
                INSERT INTO participations (activity_id, student_id)
                SELECT ?, id FROM students WHERE email = ?
                "#,
            )
            .bind(activity_id)
            .bind(*email)
            .execute(&mut *transaction)
            .await?;
        }
    }

    transaction.commit().await?;
    tracing::info!(
        "seeded {} students and {} activities",
        STUDENTS.len(),
        ACTIVITIES.len()
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        adapters::outbound::sqlite::SqliteActivityStore,
        domain::{ports::inbound::ActivityService, services::ActivityServiceImpl},
    };

    #[tokio::test]
    async fn seeds_empty_database_once() {
        let store = SqliteActivityStore::in_memory().await.unwrap();

        assert!(seed_if_empty(store.pool()).await.unwrap());
        assert!(!seed_if_empty(store.pool()).await.unwrap());

        assert_eq!(store.count_rows("students").await.unwrap(), 3);
        assert_eq!(store.count_rows("activities").await.unwrap(), 2);
        assert_eq!(store.count_rows("participations").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn skips_database_with_activities() {
        let store = SqliteActivityStore::in_memory().await.unwrap();
        store.insert_activity("Art Club", 10).await.unwrap();

        assert!(!seed_if_empty(store.pool()).await.unwrap());
        assert_eq!(store.count_rows("students").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn seeded_rosters_are_listed() {
        let store = Arc::new(SqliteActivityStore::in_memory().await.unwrap());
        seed_if_empty(store.pool()).await.unwrap();

        let service = ActivityServiceImpl::new(store);
        let rosters = service.list_activities().await.unwrap();

        let chess = &rosters["Chess Club"];
        assert_eq!(chess.activity.max_participants, 12);
        assert_eq!(
            chess.activity.schedule.as_deref(),
            Some("Fridays, 3:30 PM - 5:00 PM")
        );
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert_eq!(
            rosters["Programming Class"].participants,
            vec!["emma@mergington.edu"]
        );
    }
}
