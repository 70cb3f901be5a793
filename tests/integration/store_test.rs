//! Store persistence and backend selection tests

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use xftodo::backend::store::{open_store, SqliteStore, TodoStore};
use xftodo::shared::Todo;

use crate::assert_ok;
use crate::common::database::sqlite_url;

#[tokio::test]
async fn test_todos_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = sqlite_url(&dir);

    let mut todo = Todo::create("persist me", Utc.timestamp_millis_opt(1_699_999_999_123).unwrap());
    {
        let store = TodoStore::Sqlite(assert_ok!(SqliteStore::connect(&url).await));
        store.insert(&todo).await.unwrap();
        todo.resume_timer(1_700_000_000_000);
        todo.saved_time = 17;
        assert!(store.save(&todo).await.unwrap());
    }

    let reopened = TodoStore::Sqlite(assert_ok!(SqliteStore::connect(&url).await, "Reopening failed"));
    assert_eq!(reopened.list().await.unwrap(), vec![todo]);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let url = sqlite_url(&dir);

    assert_ok!(SqliteStore::connect(&url).await);
    assert_ok!(SqliteStore::connect(&url).await, "Second migration run failed");
}

#[tokio::test]
async fn test_open_store_without_url_uses_memory() {
    let store = open_store(None).await;
    assert_eq!(store.backend_name(), "memory");
}

#[tokio::test]
async fn test_open_store_with_url_uses_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(Some(&sqlite_url(&dir))).await;
    assert_eq!(store.backend_name(), "sqlite");
    assert!(dir.path().join("todos.db").exists());
}

#[tokio::test]
async fn test_open_store_falls_back_when_database_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("missing").join("todos.db").display());

    let store = open_store(Some(&url)).await;
    assert_eq!(store.backend_name(), "memory");
}

#[tokio::test]
async fn test_save_after_delete_reports_missing_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::Sqlite(SqliteStore::connect(&sqlite_url(&dir)).await.unwrap());

    let todo = Todo::create("short lived", Utc::now());
    store.insert(&todo).await.unwrap();
    assert!(store.delete(&todo.id).await.unwrap());

    assert!(!store.save(&todo).await.unwrap());
    assert!(!store.delete(&todo.id).await.unwrap());
}
