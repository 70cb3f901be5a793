//! In-process todo store.
//!
//! Used when no database is configured, when the database cannot be opened,
//! and by tests. Records live in insertion order, which is also creation
//! order.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::Todo;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn insert(&self, todo: &Todo) {
        self.todos.write().await.push(todo.clone());
    }

    pub async fn find(&self, id: &str) -> Option<Todo> {
        self.todos.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// Replace the stored record with the same id. Returns `false` if it is gone.
    pub async fn save(&self, todo: &Todo) -> bool {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo.clone();
                true
            }
            None => false,
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        todos.len() != before
    }
}
