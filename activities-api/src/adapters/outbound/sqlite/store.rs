use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use super::{SqliteSession, StoreError};
use crate::{
    config::DatabaseSettings,
    domain::{
        ports::outbound::{ActivityStore, SessionMode},
        ActivityError,
    },
};

const SCHEMA: &str = include_str!("schema.sql");

pub struct SqliteActivityStore {
    pool: SqlitePool,
}

impl SqliteActivityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let options = settings
            .connect_options()
            .map_err(|source| StoreError::InvalidUrl {
                url: settings.url.clone(),
                source,
            })?;

        // Every connection to an in-memory database sees its own empty
        // database, so the pool must keep exactly one alive.
        let pool_options = if settings.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(settings.max_connections)
        };

        // Read-only sessions switch their connection to `query_only`; undo
        // that before the connection serves anyone else.
        let pool = pool_options
            .after_release(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA query_only = OFF")
                        .execute(&mut *conn)
                        .await?;
                    Ok(true)
                })
            })
            .connect_with(options)
            .await?;
        tracing::debug!("connected to {}", settings.url);

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes that do not exist yet. Existing data is
    /// never touched.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for SqliteActivityStore {
    type Session = SqliteSession;

    async fn open_session(&self, mode: SessionMode) -> Result<SqliteSession, ActivityError> {
        let transaction = match mode {
            SessionMode::ReadOnly => {
                let mut transaction = self.pool.begin().await.map_err(ActivityError::storage)?;
                sqlx::query("PRAGMA query_only = ON")
                    .execute(&mut *transaction)
                    .await
                    .map_err(ActivityError::storage)?;
                transaction
            }
            SessionMode::ReadWrite => self
                .pool
                .begin_with("BEGIN IMMEDIATE")
                .await
                .map_err(ActivityError::storage)?,
        };

        Ok(SqliteSession::new(transaction))
    }
}

#[cfg(test)]
impl SqliteActivityStore {
    pub async fn in_memory() -> Result<Self, StoreError> {
        let settings = DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let store = Self::connect(&settings).await?;
        store.initialize().await?;
        Ok(store)
    }

    pub async fn insert_activity(
        &self,
        name: &str,
        max_participants: i64,
    ) -> Result<crate::domain::models::ActivityId, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO activities (name, description, schedule, max_participants)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(format!("All about {name}"))
        .bind("Mondays, 3:30 PM - 5:00 PM")
        .bind(max_participants)
        .fetch_one(&self.pool)
        .await?;

        Ok(id.into())
    }

    pub async fn count_rows(&self, table: &str) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a participation pointing at a student that does not exist.
    pub async fn insert_orphan_participation(&self, activity_name: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(&mut *conn)
            .await?;
        sqlx::query(
            r#"
            INSERT INTO participations (activity_id, student_id)
            SELECT id, 9999 FROM activities WHERE name = ?
            "#,
        )
        .bind(activity_name)
        .execute(&mut *conn)
        .await?;
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
