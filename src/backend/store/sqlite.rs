/**
 * SQLite Todo Store
 *
 * This module persists todo records in a single `todos` table through a
 * `sqlx` SQLite pool. The schema lives in `migrations/` and is applied with
 * `sqlx::migrate!` when the store is opened.
 *
 * Updates replace the whole row, so two concurrent writers on the same id
 * resolve as last write wins.
 */

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::backend::error::BackendError;
use crate::shared::Todo;

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: String,
    text: String,
    completed: bool,
    timer_started: bool,
    timer_start_time: Option<i64>,
    saved_time: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = BackendError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let saved_time = u64::try_from(row.saved_time).map_err(|_| {
            BackendError::invalid_record(&row.id, format!("negative saved_time {}", row.saved_time))
        })?;

        Ok(Todo {
            id: row.id,
            text: row.text,
            completed: row.completed,
            timer_started: row.timer_started,
            timer_start_time: row.timer_start_time,
            saved_time,
            created_at: row.created_at,
        })
    }
}

fn saved_time_column(todo: &Todo) -> Result<i64, BackendError> {
    i64::try_from(todo.saved_time)
        .map_err(|_| BackendError::invalid_record(&todo.id, "saved_time out of range"))
}

/// Todo store backed by a SQLite database
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `database_url` and run migrations
    pub async fn connect(database_url: &str) -> Result<Self, BackendError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and run migrations on it
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, BackendError> {
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn list(&self) -> Result<Vec<Todo>, BackendError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, completed, timer_started, timer_start_time, saved_time, created_at
            FROM todos
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    pub async fn insert(&self, todo: &Todo) -> Result<(), BackendError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, text, completed, timer_started, timer_start_time, saved_time, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&todo.id)
        .bind(&todo.text)
        .bind(todo.completed)
        .bind(todo.timer_started)
        .bind(todo.timer_start_time)
        .bind(saved_time_column(todo)?)
        .bind(todo.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find(&self, id: &str) -> Result<Option<Todo>, BackendError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, completed, timer_started, timer_start_time, saved_time, created_at
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::try_from).transpose()
    }

    /// Overwrite the mutable fields of an existing row. Returns `false` if the row is gone.
    pub async fn save(&self, todo: &Todo) -> Result<bool, BackendError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET text = ?, completed = ?, timer_started = ?, timer_start_time = ?, saved_time = ?
            WHERE id = ?
            "#,
        )
        .bind(&todo.text)
        .bind(todo.completed)
        .bind(todo.timer_started)
        .bind(todo.timer_start_time)
        .bind(saved_time_column(todo)?)
        .bind(&todo.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, BackendError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
