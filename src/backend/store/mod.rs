//! Todo Store Module
//!
//! This module holds the single collection of todo records the server works
//! on. Two backends are available:
//!
//! - **`sqlite`** - Persistent store on a `sqlx` SQLite pool
//! - **`memory`** - In-process store, used when no database is configured
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs    - TodoStore dispatch and backend selection
//! ├── memory.rs - In-process store
//! └── sqlite.rs - SQLite store and schema migrations
//! ```
//!
//! Handlers only see `TodoStore`; every operation works on one record by id
//! or on the whole collection.

/// In-process store
pub mod memory;

/// SQLite store
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::backend::error::BackendError;
use crate::shared::Todo;

/// The document store holding every todo
#[derive(Debug, Clone)]
pub enum TodoStore {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl TodoStore {
    /// Fresh, empty in-process store
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Short name of the active backend, for logs and `/health`
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Every todo in creation order
    pub async fn list(&self) -> Result<Vec<Todo>, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.list().await),
            Self::Sqlite(store) => store.list().await,
        }
    }

    pub async fn insert(&self, todo: &Todo) -> Result<(), BackendError> {
        match self {
            Self::Memory(store) => {
                store.insert(todo).await;
                Ok(())
            }
            Self::Sqlite(store) => store.insert(todo).await,
        }
    }

    pub async fn find(&self, id: &str) -> Result<Option<Todo>, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.find(id).await),
            Self::Sqlite(store) => store.find(id).await,
        }
    }

    /// Write back a modified todo. Returns `false` when it was deleted meanwhile.
    pub async fn save(&self, todo: &Todo) -> Result<bool, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.save(todo).await),
            Self::Sqlite(store) => store.save(todo).await,
        }
    }

    /// Remove a todo. Returns whether it existed.
    pub async fn delete(&self, id: &str) -> Result<bool, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.delete(id).await),
            Self::Sqlite(store) => store.delete(id).await,
        }
    }
}

/// Open the store described by `database_url`.
///
/// Without a URL, or when the database cannot be opened, the server keeps
/// running on an in-process store and logs why.
pub async fn open_store(database_url: Option<&str>) -> TodoStore {
    let Some(url) = database_url else {
        tracing::warn!("[Store] DATABASE_URL not set. Todos will be kept in memory only.");
        return TodoStore::memory();
    };

    tracing::info!("[Store] Connecting to database...");

    match SqliteStore::connect(url).await {
        Ok(store) => {
            tracing::info!("[Store] Database ready, migrations applied");
            TodoStore::Sqlite(store)
        }
        Err(e) => {
            tracing::error!("[Store] Failed to open database: {}", e);
            tracing::warn!("[Store] Falling back to in-memory store");
            TodoStore::memory()
        }
    }
}
